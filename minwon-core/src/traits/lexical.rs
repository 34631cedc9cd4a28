use crate::errors::MinwonResult;
use crate::models::RetrievedDocument;

/// Lexical (keyword) retrieval provider.
pub trait LexicalSearch: Send + Sync {
    /// Return the top `k` documents for `query`, sorted descending by
    /// score. Documents with non-positive score are excluded as noise.
    /// A missing index returns an empty sequence (degraded mode), not
    /// an error.
    fn search(&self, query: &str, k: usize) -> MinwonResult<Vec<RetrievedDocument>>;
}
