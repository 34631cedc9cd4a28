//! Inverted index for BM25 keyword search.
//!
//! Maps terms to postings lists (document ID + term frequency). Documents
//! are identified by their position in the adapter's document store.
//! Document lengths are tracked for BM25 length normalization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single entry in a term's postings list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Posting {
    /// Index into the adapter's document store.
    pub doc_id: u32,
    /// Number of times the term appears in this document.
    pub term_frequency: u32,
}

/// Inverted index mapping terms to postings lists.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct InvertedIndex {
    /// term → list of postings
    pub index: HashMap<String, Vec<Posting>>,
    /// doc_id → document length (number of tokens).
    pub doc_lengths: Vec<u32>,
    /// Total number of documents indexed.
    pub doc_count: u32,
    /// Sum of all document lengths (for average calculation).
    pub total_doc_length: u64,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index one document's tokens under `doc_id`.
    pub fn add_document(&mut self, doc_id: u32, tokens: &[String]) {
        let doc_len = tokens.len() as u32;

        let idx = doc_id as usize;
        if idx >= self.doc_lengths.len() {
            self.doc_lengths.resize(idx + 1, 0);
        }
        self.doc_lengths[idx] = doc_len;
        self.doc_count += 1;
        self.total_doc_length += doc_len as u64;

        let mut tf_map: HashMap<&str, u32> = HashMap::new();
        for token in tokens {
            *tf_map.entry(token).or_insert(0) += 1;
        }

        for (term, tf) in tf_map {
            self.index
                .entry(term.to_string())
                .or_default()
                .push(Posting {
                    doc_id,
                    term_frequency: tf,
                });
        }
    }

    /// Average document length across all indexed documents.
    pub fn average_doc_length(&self) -> f64 {
        if self.doc_count == 0 {
            return 0.0;
        }
        self.total_doc_length as f64 / self.doc_count as f64
    }

    /// Length of one document in tokens, 0 if unknown.
    pub fn doc_length(&self, doc_id: u32) -> u32 {
        self.doc_lengths.get(doc_id as usize).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.doc_count == 0
    }
}
