//! Blueprint Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the `blueprint`
//! code generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          blueprint-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (GenerateService + Blueprint hooks)   │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: Filesystem, Templates, Planner)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   blueprint-adapters (Infrastructure)   │
//! │ (LocalFilesystem, TypeScript planner)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ResolvedPath, Placement, ModuleEdit)   │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blueprint_core::{
//!     application::{GenerateService, ServiceBlueprint},
//!     domain::{GenerateOptions, GenerationRequest, ProjectConfig},
//! };
//!
//! // 1. Describe what the user asked for
//! let request = GenerationRequest::new("user-profile", "/work/shop", "/work/shop")
//!     .with_options(GenerateOptions {
//!         module: Some("app.module".into()),
//!         ..Default::default()
//!     });
//!
//! // 2. Run the workflow (with injected adapters)
//! let service = GenerateService::new(templates, planner, filesystem);
//! let report = service
//!     .generate(&ServiceBlueprint, request, &ProjectConfig::default())
//!     .unwrap();
//! ```

// Domain layer (stable, well-defined API)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Advisory, Blueprint, GenerateService, GenerationReport, ServiceBlueprint,
        ports::{Filesystem, ProviderPlanner, TemplateSource},
    };
    pub use crate::domain::{
        AppDescriptor, ArtifactPlacement, GenerateOptions, GenerationRequest, ImportDescriptor,
        ModuleEdit, ProjectConfig, ResolvedPath, TemplateFile,
    };
    pub use crate::error::{BlueprintError, BlueprintResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
