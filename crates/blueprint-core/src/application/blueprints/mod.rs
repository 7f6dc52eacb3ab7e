//! Concrete blueprints.

pub mod service;

pub use service::ServiceBlueprint;
