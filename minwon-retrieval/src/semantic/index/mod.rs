//! Vector index backends and the selection factory.

pub mod http_index;
pub mod memory_index;

pub use http_index::HttpVectorIndex;
pub use memory_index::CosineVectorIndex;

use tracing::{info, warn};

use minwon_core::config::RetrievalConfig;
use minwon_core::traits::VectorIndex;

/// Select a vector index for the given configuration.
///
/// An empty `vector_index_url` selects the in-memory index (empty until
/// populated — searches return nothing, which downstream treats as the
/// degraded mode). A configured URL is health-checked once; an unreachable
/// service falls back to the empty in-memory index with a warning, so
/// startup never fails on a missing collaborator.
pub fn create_index(config: &RetrievalConfig) -> Box<dyn VectorIndex> {
    if config.vector_index_url.is_empty() {
        info!(dims = config.embedding_dimensions, "using in-memory vector index");
        return Box::new(CosineVectorIndex::new(config.embedding_dimensions));
    }

    match HttpVectorIndex::new(config) {
        Ok(index) => {
            if index.health_check() {
                info!(url = %config.vector_index_url, "vector index ready");
                Box::new(index)
            } else {
                warn!(
                    url = %config.vector_index_url,
                    "vector index failed health check; semantic search degraded"
                );
                Box::new(CosineVectorIndex::new(config.embedding_dimensions))
            }
        }
        Err(e) => {
            warn!(error = %e, "could not construct vector index client; semantic search degraded");
            Box::new(CosineVectorIndex::new(config.embedding_dimensions))
        }
    }
}
