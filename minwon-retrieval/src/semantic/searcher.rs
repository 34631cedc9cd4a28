//! The similarity retrieval adapter.
//!
//! Embeds the query and asks the vector index for nearest neighbors,
//! normalizing raw backend scores to "higher is better, never negative".
//! Hit order is the backend's own best-first order and is preserved;
//! normalization never reorders.

use tracing::{debug, warn};

use minwon_core::config::RetrievalConfig;
use minwon_core::models::{RetrievalKind, RetrievedDocument};
use minwon_core::traits::{EmbeddingBackend, SimilaritySearch, VectorIndex};
use minwon_core::MinwonResult;

use super::index;
use super::normalize::normalize_cosine_score;
use super::providers;

/// Vector similarity search over an embedding backend and a vector index.
pub struct SemanticSearcher {
    embedder: Box<dyn EmbeddingBackend>,
    index: Box<dyn VectorIndex>,
}

impl SemanticSearcher {
    /// Wire an adapter from explicit backends.
    pub fn new(embedder: Box<dyn EmbeddingBackend>, index: Box<dyn VectorIndex>) -> Self {
        Self { embedder, index }
    }

    /// Wire an adapter from configuration, with health-checked fallbacks.
    pub fn from_config(config: &RetrievalConfig) -> Self {
        Self {
            embedder: providers::create_embedder(config),
            index: index::create_index(config),
        }
    }

    pub fn backend_names(&self) -> (String, String) {
        (
            self.embedder.name().to_string(),
            self.index.name().to_string(),
        )
    }
}

impl SimilaritySearch for SemanticSearcher {
    fn search(&self, query: &str, k: usize) -> MinwonResult<Vec<RetrievedDocument>> {
        if !self.embedder.is_available() || !self.index.is_available() {
            warn!(
                embedder = self.embedder.name(),
                index = self.index.name(),
                "semantic backend unavailable; returning no documents"
            );
            return Ok(Vec::new());
        }

        let embedding = self.embedder.embed(query)?;
        let hits = self.index.search(&embedding, k)?;

        let documents: Vec<RetrievedDocument> = hits
            .into_iter()
            .map(|hit| {
                let score = normalize_cosine_score(hit.raw_score);
                RetrievedDocument::new(hit.text, hit.source, score, RetrievalKind::Semantic)
            })
            .collect();

        debug!(results = documents.len(), "semantic search complete");
        Ok(documents)
    }
}
