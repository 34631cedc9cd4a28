use crate::errors::MinwonResult;
use crate::models::RetrievedDocument;

/// Semantic (vector) retrieval provider.
pub trait SimilaritySearch: Send + Sync {
    /// Return the `k` nearest documents for `query`, best first.
    ///
    /// Scores are normalized to "higher is better" and never negative;
    /// callers never see raw distance semantics. A known-unavailable
    /// backend returns an empty sequence (degraded mode); `Err` is
    /// reserved for unexpected transport or embedding failures.
    fn search(&self, query: &str, k: usize) -> MinwonResult<Vec<RetrievedDocument>>;
}
