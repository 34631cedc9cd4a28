use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Evidence documents returned to the decision engine per request.
    pub top_k: usize,
    /// Each adapter fetches `top_k * fetch_multiplier` candidates so the
    /// fused ranking has enough headroom before truncation.
    pub fetch_multiplier: usize,
    /// RRF smoothing constant. Higher values flatten the influence of
    /// top-ranked items from any single list.
    pub rrf_k: u32,
    /// BM25 Okapi k1 (term-frequency saturation).
    pub bm25_k1: f64,
    /// BM25 Okapi b (document-length normalization).
    pub bm25_b: f64,
    /// Path of the serialized lexical index. A missing file degrades the
    /// lexical adapter to empty results instead of failing.
    pub index_path: String,
    /// Embedding service base URL (Ollama-compatible `/api/embed`).
    /// Empty selects the deterministic hashing fallback embedder.
    pub embedding_url: String,
    /// Model identifier sent to the embedding service.
    pub embedding_model: String,
    /// Dimensionality of the vector space; must match the index.
    pub embedding_dimensions: usize,
    /// Remote vector index base URL. Empty selects the in-memory index.
    pub vector_index_url: String,
    /// Per-request timeout for the remote embedding and vector backends.
    pub timeout_secs: u64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            fetch_multiplier: defaults::DEFAULT_FETCH_MULTIPLIER,
            rrf_k: defaults::DEFAULT_RRF_K,
            bm25_k1: defaults::DEFAULT_BM25_K1,
            bm25_b: defaults::DEFAULT_BM25_B,
            index_path: defaults::DEFAULT_INDEX_PATH.to_string(),
            embedding_url: defaults::DEFAULT_EMBEDDING_URL.to_string(),
            embedding_model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            embedding_dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            vector_index_url: defaults::DEFAULT_VECTOR_INDEX_URL.to_string(),
            timeout_secs: defaults::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl RetrievalConfig {
    /// Candidates each adapter fetches before fusion.
    pub fn fetch_k(&self) -> usize {
        self.top_k * self.fetch_multiplier
    }
}
