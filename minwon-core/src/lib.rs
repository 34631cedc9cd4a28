//! # minwon-core
//!
//! Foundation crate for the minwon complaint routing engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod title;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MinwonConfig;
pub use errors::{MinwonError, MinwonResult};
pub use models::{
    AgencyScoreboard, Classification, Confidence, FusedDocument, RetrievalKind, RetrievedDocument,
};
