//! # minwon-retrieval
//!
//! The evidence-gathering half of the routing engine. Two adapters run in
//! parallel and their rankings are fused by reciprocal rank.
//!
//! ## Architecture
//!
//! ```text
//! HybridSearcher
//! ├── SemanticSearcher (SimilaritySearch)
//! │   ├── EmbeddingBackend (HTTP service or hashing fallback)
//! │   └── VectorIndex (HTTP service or in-memory cosine)
//! ├── Bm25Searcher (LexicalSearch)
//! │   ├── Tokenizer (unicode word segmentation)
//! │   ├── InvertedIndex (term → postings)
//! │   └── BM25 Okapi scorer
//! └── RRF Fusion (reciprocal rank, text-keyed dedup)
//! ```
//!
//! Both adapters degrade to empty results when their backend is missing or
//! unreachable; only both failing at once surfaces an error.

pub mod lexical;
pub mod search;
pub mod semantic;

pub use lexical::Bm25Searcher;
pub use search::HybridSearcher;
pub use semantic::SemanticSearcher;
