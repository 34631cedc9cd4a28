//! Reciprocal Rank Fusion: score = Σ 1/(k + rank + 1)
//!
//! Combines the semantic and lexical rankings into a single fused ranking
//! without requiring score normalization across the two methods. Documents
//! are keyed by byte-identical body text: the same chunk retrieved by both
//! adapters accumulates both contributions.

use std::collections::HashMap;

use minwon_core::models::{FusedDocument, RetrievedDocument};

/// Fuse two ranked lists using Reciprocal Rank Fusion.
///
/// `k_const` is the smoothing constant (default 60). Higher values flatten
/// the influence of top-ranked items from any single list. Rank is 0-based,
/// so the first item of a list contributes `1 / (k_const + 1)`.
///
/// The semantic list is processed first, so when both adapters return the
/// same text the retained record (and its score/kind) is the semantic one.
/// Documents with empty text cannot be keyed and are skipped. Ties in the
/// fused score keep first-seen order.
pub fn fuse(
    semantic: &[RetrievedDocument],
    lexical: &[RetrievedDocument],
    k_const: u32,
) -> Vec<FusedDocument> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut fused: Vec<FusedDocument> = Vec::new();

    for list in [semantic, lexical] {
        for (rank, doc) in list.iter().enumerate() {
            if doc.text.is_empty() {
                continue;
            }

            let contribution = 1.0 / (k_const as f64 + rank as f64 + 1.0);
            match slots.get(doc.text.as_str()) {
                Some(&slot) => fused[slot].fusion_score += contribution,
                None => {
                    slots.insert(doc.text.as_str(), fused.len());
                    fused.push(FusedDocument {
                        document: doc.clone(),
                        fusion_score: contribution,
                    });
                }
            }
        }
    }

    // Stable sort: equal scores keep insertion order.
    fused.sort_by(|a, b| {
        b.fusion_score
            .partial_cmp(&a.fusion_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    fused
}
