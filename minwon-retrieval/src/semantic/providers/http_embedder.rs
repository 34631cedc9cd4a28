//! Remote embedding service client (Ollama-compatible `/api/embed`).
//!
//! Synchronous facade over an async `reqwest` client: the adapter owns a
//! current-thread tokio runtime and blocks on each call. Requests carry an
//! explicit timeout; a transport failure marks the backend unavailable so
//! the searcher degrades instead of timing out on every query.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use minwon_core::config::RetrievalConfig;
use minwon_core::errors::RetrievalError;
use minwon_core::traits::EmbeddingBackend;
use minwon_core::MinwonResult;

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

/// HTTP embedding backend.
pub struct HttpEmbedder {
    base_url: String,
    model: String,
    dimensions: usize,
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
    available: AtomicBool,
}

impl HttpEmbedder {
    pub fn new(config: &RetrievalConfig) -> Result<Self, RetrievalError> {
        let timeout = Duration::from_secs(config.timeout_secs);

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RetrievalError::EmbeddingFailed {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| RetrievalError::EmbeddingFailed {
                reason: format!("failed to build tokio runtime: {e}"),
            })?;

        Ok(Self {
            base_url: config.embedding_url.trim_end_matches('/').to_string(),
            model: config.embedding_model.clone(),
            dimensions: config.embedding_dimensions,
            client,
            runtime,
            available: AtomicBool::new(true),
        })
    }

    /// Probe the service with a one-word embedding request.
    ///
    /// Updates the availability flag and returns it; intended to run once
    /// at startup, mirroring the index ping the rest of the pipeline does.
    pub fn health_check(&self) -> bool {
        match self.request_embedding("핑") {
            Ok(v) if v.len() == self.dimensions => {
                self.available.store(true, Ordering::Relaxed);
                true
            }
            Ok(v) => {
                warn!(
                    expected = self.dimensions,
                    actual = v.len(),
                    "embedding service returns wrong dimensionality"
                );
                self.available.store(false, Ordering::Relaxed);
                false
            }
            Err(e) => {
                warn!(url = %self.base_url, error = %e, "embedding service unreachable");
                self.available.store(false, Ordering::Relaxed);
                false
            }
        }
    }

    fn request_embedding(&self, text: &str) -> Result<Vec<f32>, RetrievalError> {
        let url = format!("{}/api/embed", self.base_url);
        let request = EmbedRequest {
            model: &self.model,
            input: text,
        };

        let response: EmbedResponse = self.runtime.block_on(async {
            let resp = self
                .client
                .post(&url)
                .json(&request)
                .send()
                .await
                .map_err(|e| RetrievalError::EmbeddingFailed {
                    reason: format!("request to {url} failed: {e}"),
                })?;

            if !resp.status().is_success() {
                return Err(RetrievalError::EmbeddingFailed {
                    reason: format!("embedding service returned {}", resp.status()),
                });
            }

            resp.json().await.map_err(|e| RetrievalError::EmbeddingFailed {
                reason: format!("malformed embedding response: {e}"),
            })
        })?;

        response
            .embeddings
            .into_iter()
            .next()
            .ok_or_else(|| RetrievalError::EmbeddingFailed {
                reason: "embedding response contained no vectors".to_string(),
            })
    }
}

impl EmbeddingBackend for HttpEmbedder {
    fn embed(&self, text: &str) -> MinwonResult<Vec<f32>> {
        let vector = self.request_embedding(text).map_err(|e| {
            self.available.store(false, Ordering::Relaxed);
            e
        })?;

        if vector.len() != self.dimensions {
            return Err(RetrievalError::DimensionMismatch {
                expected: self.dimensions,
                actual: vector.len(),
            }
            .into());
        }

        debug!(model = %self.model, dims = vector.len(), "query embedded");
        Ok(vector)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "http-embed"
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }
}
