/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("search failed: {reason}")]
    SearchFailed { reason: String },

    #[error("embedding failed: {reason}")]
    EmbeddingFailed { reason: String },

    #[error("backend unavailable: {backend}")]
    BackendUnavailable { backend: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("index load failed: {path}: {reason}")]
    IndexLoadFailed { path: String, reason: String },

    #[error("index save failed: {path}: {reason}")]
    IndexSaveFailed { path: String, reason: String },
}
