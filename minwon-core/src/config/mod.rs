//! Configuration for the minwon routing engine.
//!
//! A `MinwonConfig` is loaded once at process start and treated as
//! immutable afterwards; every field has a compiled default so an empty
//! TOML file (or no file at all) yields a working configuration.

pub mod defaults;

mod decision_policy;
mod retrieval_config;

pub use decision_policy::{AgencyCode, CategoryRule, DecisionPolicy, HardRule, KeywordRule};
pub use retrieval_config::RetrievalConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MinwonConfig {
    pub retrieval: RetrievalConfig,
    pub decision: DecisionPolicy,
}

impl MinwonConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &MinwonConfig) -> Result<(), ConfigError> {
        if config.retrieval.top_k == 0 || config.retrieval.top_k > constants::MAX_TOP_K {
            return Err(ConfigError::ValidationFailed {
                field: "retrieval.top_k".to_string(),
                message: format!("must be between 1 and {}", constants::MAX_TOP_K),
            });
        }
        if config.retrieval.fetch_multiplier == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "retrieval.fetch_multiplier".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if config.retrieval.rrf_k == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "retrieval.rrf_k".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if config.retrieval.bm25_k1 <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "retrieval.bm25_k1".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&config.retrieval.bm25_b) {
            return Err(ConfigError::ValidationFailed {
                field: "retrieval.bm25_b".to_string(),
                message: "must be between 0.0 and 1.0".to_string(),
            });
        }
        if config.retrieval.embedding_dimensions == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "retrieval.embedding_dimensions".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.retrieval.timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "retrieval.timeout_secs".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if !(0.0..=1.0).contains(&config.decision.broad_law_penalty) {
            return Err(ConfigError::ValidationFailed {
                field: "decision.broad_law_penalty".to_string(),
                message: "must be between 0.0 and 1.0".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&config.decision.confidence_floor) {
            return Err(ConfigError::ValidationFailed {
                field: "decision.confidence_floor".to_string(),
                message: "must be between 0.0 and 1.0".to_string(),
            });
        }
        if config.decision.gap_floor < 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "decision.gap_floor".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if config.decision.institutional_score_cap < 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "decision.institutional_score_cap".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&config.decision.min_semantic_score) {
            return Err(ConfigError::ValidationFailed {
                field: "decision.min_semantic_score".to_string(),
                message: "must be between 0.0 and 1.0".to_string(),
            });
        }
        if config.decision.lexical_damping <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "decision.lexical_damping".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        // An empty trigger is contained in every query, which would turn the
        // hard rule into an unconditional route.
        if config.decision.hard_rule.trigger.trim().is_empty()
            && !config.decision.hard_rule.co_terms.is_empty()
        {
            return Err(ConfigError::ValidationFailed {
                field: "decision.hard_rule.trigger".to_string(),
                message: "must not be empty while co_terms are set".to_string(),
            });
        }
        if config.decision.fallback_agency.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "decision.fallback_agency".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
