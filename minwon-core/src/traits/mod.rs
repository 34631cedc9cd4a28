//! Trait seams between the engine and its collaborators.
//!
//! The decision engine receives adapters as `&dyn` parameters instead of
//! reaching for globals, so tests can substitute deterministic mocks.

mod classifier;
mod embedding;
mod lexical;
mod similarity;
mod vector_index;

pub use classifier::Classifier;
pub use embedding::EmbeddingBackend;
pub use lexical::LexicalSearch;
pub use similarity::SimilaritySearch;
pub use vector_index::{VectorHit, VectorIndex};
