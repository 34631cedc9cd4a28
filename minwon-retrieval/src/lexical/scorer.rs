//! BM25 Okapi scoring over the inverted index.
//!
//! IDF uses the `+1` variant, `log((N - df + 0.5) / (df + 0.5) + 1)`, so
//! terms appearing in most documents still contribute a small positive
//! weight instead of flipping negative.

use std::collections::HashMap;

use super::inverted_index::InvertedIndex;

/// Score every document matching at least one query token.
///
/// Returns `(doc_id, score)` sorted by descending score; ties break by
/// ascending doc id so repeated queries rank identically.
pub fn bm25_scores(
    index: &InvertedIndex,
    query_tokens: &[String],
    k1: f64,
    b: f64,
) -> Vec<(u32, f64)> {
    if query_tokens.is_empty() || index.doc_count == 0 {
        return Vec::new();
    }

    let avgdl = index.average_doc_length();
    let n = index.doc_count as f64;

    let mut scores: HashMap<u32, f64> = HashMap::new();

    for token in query_tokens {
        let Some(postings) = index.index.get(token) else {
            continue;
        };
        let df = postings.len() as f64;
        let idf = ((n - df + 0.5) / (df + 0.5) + 1.0).ln();

        for posting in postings {
            let dl = index.doc_length(posting.doc_id) as f64;
            let tf = posting.term_frequency as f64;

            let tf_norm = (tf * (k1 + 1.0)) / (tf + k1 * (1.0 - b + b * dl / avgdl));
            *scores.entry(posting.doc_id).or_insert(0.0) += idf * tf_norm;
        }
    }

    let mut results: Vec<(u32, f64)> = scores.into_iter().collect();
    results.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    results
}
