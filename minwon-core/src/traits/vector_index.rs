use crate::errors::MinwonResult;

/// One nearest-neighbor hit as reported by a vector index.
///
/// `raw_score` carries whatever the backend reports — cosine similarity
/// or cosine distance depending on store configuration. Normalization to
/// "higher is better" happens in the similarity adapter, never here.
#[derive(Debug, Clone)]
pub struct VectorHit {
    pub text: String,
    pub source: String,
    pub raw_score: f64,
}

/// Nearest-neighbor search over an existing vector index.
pub trait VectorIndex: Send + Sync {
    /// Return the `k` nearest stored documents for `embedding`, best first.
    fn search(&self, embedding: &[f32], k: usize) -> MinwonResult<Vec<VectorHit>>;

    /// Human-readable index name.
    fn name(&self) -> &str;

    /// Whether this index is currently reachable.
    fn is_available(&self) -> bool;
}
