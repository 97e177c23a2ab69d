//! Prompt template registry and feature dispatch
//! The core of the application: a closed catalog of seven analysis
//! features and the substitution that turns one into a backend payload

pub mod dispatcher;
pub mod registry;
pub mod templates;

pub use dispatcher::{build_payload, Payload};
pub use registry::{Feature, FeatureDefinition, FeatureRegistry};
