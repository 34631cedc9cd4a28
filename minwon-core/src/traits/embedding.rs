use crate::errors::MinwonResult;

/// Query embedding provider.
pub trait EmbeddingBackend: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> MinwonResult<Vec<f32>>;

    /// The dimensionality of embeddings produced by this backend.
    fn dimensions(&self) -> usize;

    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Whether this backend is currently available.
    fn is_available(&self) -> bool;
}
