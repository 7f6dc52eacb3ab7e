pub mod artifact_set;
pub mod common;
pub mod project;
pub mod request;
pub mod template;

pub use crate::domain::DomainError;
pub use artifact_set::{ArtifactSet, FileToWrite};
pub use common::RelativePath;
pub use project::{AppDescriptor, Defaults, ProjectConfig, ServiceDefaults};
pub use request::{GenerateOptions, GenerationRequest, ResolvedOptions};
pub use template::{FileMapTokens, RenderContext, TemplateFile};
