//! Semantic (vector) retrieval: embedding backends, vector indexes, score
//! normalization, and the adapter tying them together.

pub mod index;
pub mod normalize;
pub mod providers;
pub mod searcher;

pub use index::{CosineVectorIndex, HttpVectorIndex};
pub use normalize::normalize_cosine_score;
pub use providers::{HashEmbedder, HttpEmbedder};
pub use searcher::SemanticSearcher;
