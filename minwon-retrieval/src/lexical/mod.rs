//! Lexical (keyword) retrieval: tokenizer, inverted index, BM25 scoring,
//! and the adapter tying them together.

pub mod inverted_index;
pub mod scorer;
pub mod searcher;
pub mod tokenizer;

pub use inverted_index::{InvertedIndex, Posting};
pub use scorer::bm25_scores;
pub use searcher::Bm25Searcher;
pub use tokenizer::{Tokenizer, UnicodeTokenizer};
