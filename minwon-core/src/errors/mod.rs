//! Error handling for minwon.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! The decision layer deliberately has no error enum: evidence-absent and
//! ambiguous-evidence cases produce a fallback classification, and table
//! lookup gaps degrade with a warning. Only retrieval backends and
//! configuration loading can genuinely fail.

pub mod config_error;
pub mod retrieval_error;

pub use config_error::ConfigError;
pub use retrieval_error::RetrievalError;

/// Top-level error aggregating all subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum MinwonError {
    #[error("Retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias used throughout the workspace.
pub type MinwonResult<T> = Result<T, MinwonError>;
