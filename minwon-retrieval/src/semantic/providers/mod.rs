//! Embedding backends and the selection factory.

pub mod hash_embedder;
pub mod http_embedder;

pub use hash_embedder::HashEmbedder;
pub use http_embedder::HttpEmbedder;

use tracing::{info, warn};

use minwon_core::config::RetrievalConfig;
use minwon_core::traits::EmbeddingBackend;

/// Select an embedding backend for the given configuration.
///
/// An empty `embedding_url` selects the deterministic hashing embedder
/// directly. Otherwise the remote client is built and health-checked, and
/// the hashing embedder steps in when the service is unreachable — the
/// engine always ends up with a working backend.
pub fn create_embedder(config: &RetrievalConfig) -> Box<dyn EmbeddingBackend> {
    if config.embedding_url.is_empty() {
        info!(dims = config.embedding_dimensions, "using hashing embedder");
        return Box::new(HashEmbedder::new(config.embedding_dimensions));
    }

    match HttpEmbedder::new(config) {
        Ok(embedder) => {
            if embedder.health_check() {
                info!(
                    url = %config.embedding_url,
                    model = %config.embedding_model,
                    "embedding service ready"
                );
                Box::new(embedder)
            } else {
                warn!(
                    url = %config.embedding_url,
                    "embedding service failed health check; falling back to hashing embedder"
                );
                Box::new(HashEmbedder::new(config.embedding_dimensions))
            }
        }
        Err(e) => {
            warn!(error = %e, "could not construct embedding client; falling back to hashing embedder");
            Box::new(HashEmbedder::new(config.embedding_dimensions))
        }
    }
}
