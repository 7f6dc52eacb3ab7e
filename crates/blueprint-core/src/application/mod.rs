//! Application layer for blueprint.
//!
//! This layer contains:
//! - **Blueprint**: the hook trait every generator implements
//! - **Blueprints**: concrete generators (ServiceBlueprint)
//! - **Services**: Use case orchestration (GenerateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Naming, path and edit rules live in `crate::domain`; this layer only
//! sequences them around I/O.

pub mod blueprint;
pub mod blueprints;
pub mod error;
pub mod ports;
pub mod services;

pub use blueprint::{Advisory, Blueprint, HookContext, PostInstall, WorkflowState};
pub use blueprints::ServiceBlueprint;
pub use services::{GenerateService, GenerationReport};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ProviderPlanner, TemplateSource};

pub use error::ApplicationError;
