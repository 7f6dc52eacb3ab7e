//! Host module edit planners.

mod typescript;

pub use typescript::TypeScriptPlanner;
