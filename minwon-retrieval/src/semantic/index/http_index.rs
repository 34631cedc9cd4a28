//! Remote vector index client.
//!
//! Talks to a JSON search endpoint (`POST /search` with the query
//! embedding, `GET /health` for the startup probe). Raw hit scores pass
//! through untouched; the similarity adapter normalizes them.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use minwon_core::config::RetrievalConfig;
use minwon_core::errors::RetrievalError;
use minwon_core::traits::{VectorHit, VectorIndex};
use minwon_core::MinwonResult;

#[derive(Serialize)]
struct SearchRequest<'a> {
    embedding: &'a [f32],
    k: usize,
}

#[derive(Deserialize)]
struct RemoteHit {
    text: String,
    source: String,
    score: f64,
}

#[derive(Deserialize)]
struct SearchResponse {
    hits: Vec<RemoteHit>,
}

/// HTTP vector index backend.
pub struct HttpVectorIndex {
    base_url: String,
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
    available: AtomicBool,
}

impl HttpVectorIndex {
    pub fn new(config: &RetrievalConfig) -> Result<Self, RetrievalError> {
        let timeout = Duration::from_secs(config.timeout_secs);

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RetrievalError::BackendUnavailable {
                backend: format!("vector index client: {e}"),
            })?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| RetrievalError::BackendUnavailable {
                backend: format!("vector index runtime: {e}"),
            })?;

        Ok(Self {
            base_url: config.vector_index_url.trim_end_matches('/').to_string(),
            client,
            runtime,
            available: AtomicBool::new(true),
        })
    }

    /// Probe `GET /health`, updating and returning the availability flag.
    pub fn health_check(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        let healthy = self.runtime.block_on(async {
            match self.client.get(&url).send().await {
                Ok(resp) => resp.status().is_success(),
                Err(_) => false,
            }
        });

        if !healthy {
            warn!(url = %self.base_url, "vector index unreachable");
        }
        self.available.store(healthy, Ordering::Relaxed);
        healthy
    }
}

impl VectorIndex for HttpVectorIndex {
    fn search(&self, embedding: &[f32], k: usize) -> MinwonResult<Vec<VectorHit>> {
        let url = format!("{}/search", self.base_url);
        let request = SearchRequest { embedding, k };

        let result: Result<SearchResponse, RetrievalError> = self.runtime.block_on(async {
            let resp = self
                .client
                .post(&url)
                .json(&request)
                .send()
                .await
                .map_err(|e| RetrievalError::SearchFailed {
                    reason: format!("request to {url} failed: {e}"),
                })?;

            if !resp.status().is_success() {
                return Err(RetrievalError::SearchFailed {
                    reason: format!("vector index returned {}", resp.status()),
                });
            }

            resp.json().await.map_err(|e| RetrievalError::SearchFailed {
                reason: format!("malformed vector index response: {e}"),
            })
        });

        let response = result.map_err(|e| {
            self.available.store(false, Ordering::Relaxed);
            e
        })?;

        debug!(hits = response.hits.len(), "vector index responded");

        Ok(response
            .hits
            .into_iter()
            .map(|hit| VectorHit {
                text: hit.text,
                source: hit.source,
                raw_score: hit.score,
            })
            .collect())
    }

    fn name(&self) -> &str {
        "http-vector"
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }
}
