//! The lexical retrieval adapter.
//!
//! Wraps the inverted index, the tokenizer, and BM25 scoring into a
//! [`LexicalSearch`] implementation. The index is prebuilt: either loaded
//! from a serialized JSON file or constructed from already-chunked
//! documents handed in at startup. A missing index file degrades the
//! adapter to empty results instead of failing the process.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use minwon_core::config::{defaults, RetrievalConfig};
use minwon_core::errors::RetrievalError;
use minwon_core::models::{RetrievalKind, RetrievedDocument};
use minwon_core::traits::LexicalSearch;
use minwon_core::MinwonResult;

use super::inverted_index::InvertedIndex;
use super::scorer::bm25_scores;
use super::tokenizer::{Tokenizer, UnicodeTokenizer};

/// On-disk shape of the serialized lexical index.
///
/// `texts[i]` and `sources[i]` describe the document the postings refer to
/// as `doc_id = i`.
#[derive(Debug, Serialize, Deserialize)]
struct IndexFile {
    texts: Vec<String>,
    sources: Vec<String>,
    index: InvertedIndex,
}

/// BM25 keyword search over a prebuilt document collection.
pub struct Bm25Searcher {
    texts: Vec<String>,
    sources: Vec<String>,
    index: InvertedIndex,
    tokenizer: Box<dyn Tokenizer>,
    k1: f64,
    b: f64,
}

impl Bm25Searcher {
    /// An adapter with no index at all. Every search returns empty.
    pub fn empty() -> Self {
        Self {
            texts: Vec::new(),
            sources: Vec::new(),
            index: InvertedIndex::new(),
            tokenizer: Box::new(UnicodeTokenizer),
            k1: defaults::DEFAULT_BM25_K1,
            b: defaults::DEFAULT_BM25_B,
        }
    }

    /// Build an index from already-chunked `(text, source)` documents.
    pub fn from_documents(documents: Vec<(String, String)>, config: &RetrievalConfig) -> Self {
        Self::with_tokenizer(documents, Box::new(UnicodeTokenizer), config)
    }

    /// Build an index with a caller-supplied tokenizer.
    ///
    /// The same tokenizer is used for queries; swapping it after indexing
    /// would desynchronize index terms from query terms.
    pub fn with_tokenizer(
        documents: Vec<(String, String)>,
        tokenizer: Box<dyn Tokenizer>,
        config: &RetrievalConfig,
    ) -> Self {
        let mut texts = Vec::with_capacity(documents.len());
        let mut sources = Vec::with_capacity(documents.len());
        let mut index = InvertedIndex::new();

        for (doc_id, (text, source)) in documents.into_iter().enumerate() {
            let tokens = tokenizer.tokenize(&text);
            index.add_document(doc_id as u32, &tokens);
            texts.push(text);
            sources.push(source);
        }

        info!(documents = texts.len(), terms = index.index.len(), "lexical index built");

        Self {
            texts,
            sources,
            index,
            tokenizer,
            k1: config.bm25_k1,
            b: config.bm25_b,
        }
    }

    /// Load a serialized index from `path`.
    pub fn load(path: &Path, config: &RetrievalConfig) -> Result<Self, RetrievalError> {
        let content = std::fs::read_to_string(path).map_err(|e| RetrievalError::IndexLoadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let file: IndexFile =
            serde_json::from_str(&content).map_err(|e| RetrievalError::IndexLoadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        if file.texts.len() != file.sources.len() {
            return Err(RetrievalError::IndexLoadFailed {
                path: path.display().to_string(),
                reason: format!(
                    "{} texts but {} sources",
                    file.texts.len(),
                    file.sources.len()
                ),
            });
        }

        info!(
            path = %path.display(),
            documents = file.texts.len(),
            "lexical index loaded"
        );

        Ok(Self {
            texts: file.texts,
            sources: file.sources,
            index: file.index,
            tokenizer: Box::new(UnicodeTokenizer),
            k1: config.bm25_k1,
            b: config.bm25_b,
        })
    }

    /// Load the index named by `config.index_path`, degrading to an empty
    /// adapter (with a warning) when the file is missing or malformed.
    pub fn load_or_empty(config: &RetrievalConfig) -> Self {
        match Self::load(Path::new(&config.index_path), config) {
            Ok(searcher) => searcher,
            Err(e) => {
                warn!(
                    path = %config.index_path,
                    error = %e,
                    "lexical index unavailable; keyword search degraded to empty"
                );
                Self::empty()
            }
        }
    }

    /// Serialize the index (documents plus postings) to `path`.
    pub fn save(&self, path: &Path) -> Result<(), RetrievalError> {
        let file = IndexFile {
            texts: self.texts.clone(),
            sources: self.sources.clone(),
            index: self.index.clone(),
        };

        let json = serde_json::to_string(&file).map_err(|e| RetrievalError::IndexSaveFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        std::fs::write(path, json).map_err(|e| RetrievalError::IndexSaveFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

impl LexicalSearch for Bm25Searcher {
    fn search(&self, query: &str, k: usize) -> MinwonResult<Vec<RetrievedDocument>> {
        let tokens = self.tokenizer.tokenize(query);
        let scored = bm25_scores(&self.index, &tokens, self.k1, self.b);

        let documents: Vec<RetrievedDocument> = scored
            .into_iter()
            .filter(|(_, score)| *score > 0.0)
            .take(k)
            .filter_map(|(doc_id, score)| {
                let idx = doc_id as usize;
                match (self.texts.get(idx), self.sources.get(idx)) {
                    (Some(text), Some(source)) => Some(RetrievedDocument::new(
                        text.clone(),
                        source.clone(),
                        score,
                        RetrievalKind::Lexical,
                    )),
                    _ => {
                        warn!(doc_id, "lexical index references a missing document");
                        None
                    }
                }
            })
            .collect();

        debug!(
            query_tokens = tokens.len(),
            results = documents.len(),
            "lexical search complete"
        );

        Ok(documents)
    }
}
