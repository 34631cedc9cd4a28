//! Property tests for rank fusion and score normalization.
//!
//! The fusion contract is purely rank-based, so every property here can be
//! checked against a closed-form reference computed from rank positions.

use std::collections::{HashMap, HashSet};

use minwon_core::models::{RetrievalKind, RetrievedDocument};
use minwon_retrieval::search::fuse;
use minwon_retrieval::semantic::normalize_cosine_score;
use proptest::prelude::*;

/// Ranked list over a small pool of distinct texts, so that pairs of
/// generated lists overlap often. Texts within one list are unique, matching
/// what real adapters return.
fn doc_list(kind: RetrievalKind) -> impl Strategy<Value = Vec<RetrievedDocument>> {
    prop::collection::vec(0u8..12, 0..8).prop_map(move |ids| {
        let mut seen = HashSet::new();
        ids.into_iter()
            .filter(|id| seen.insert(*id))
            .map(|id| {
                RetrievedDocument::new(format!("문서 {id}"), format!("법령_{id}.pdf"), 0.5, kind)
            })
            .collect()
    })
}

/// Closed-form reciprocal-rank score: sum of `1 / (k + rank + 1)` over every
/// list position a text occupies.
fn reference_scores(
    semantic: &[RetrievedDocument],
    lexical: &[RetrievedDocument],
    k_const: u32,
) -> HashMap<String, f64> {
    let mut scores: HashMap<String, f64> = HashMap::new();
    for list in [semantic, lexical] {
        for (rank, doc) in list.iter().enumerate() {
            *scores.entry(doc.text.clone()).or_insert(0.0) +=
                1.0 / (k_const as f64 + rank as f64 + 1.0);
        }
    }
    scores
}

proptest! {
    #[test]
    fn fused_scores_match_closed_form(
        semantic in doc_list(RetrievalKind::Semantic),
        lexical in doc_list(RetrievalKind::Lexical),
        k_const in 1u32..200,
    ) {
        let fused = fuse(&semantic, &lexical, k_const);
        let expected = reference_scores(&semantic, &lexical, k_const);

        prop_assert_eq!(fused.len(), expected.len());
        for entry in &fused {
            let want = expected[&entry.document.text];
            prop_assert!((entry.fusion_score - want).abs() < 1e-12);
        }
    }

    #[test]
    fn fused_output_is_sorted_descending(
        semantic in doc_list(RetrievalKind::Semantic),
        lexical in doc_list(RetrievalKind::Lexical),
        k_const in 1u32..200,
    ) {
        let fused = fuse(&semantic, &lexical, k_const);
        for pair in fused.windows(2) {
            prop_assert!(pair[0].fusion_score >= pair[1].fusion_score);
        }
    }

    #[test]
    fn each_text_appears_exactly_once(
        semantic in doc_list(RetrievalKind::Semantic),
        lexical in doc_list(RetrievalKind::Lexical),
        k_const in 1u32..200,
    ) {
        let fused = fuse(&semantic, &lexical, k_const);
        let unique: HashSet<&str> = fused.iter().map(|f| f.document.text.as_str()).collect();
        prop_assert_eq!(unique.len(), fused.len());
    }

    #[test]
    fn text_leading_both_lists_always_ranks_first(
        tail_a in doc_list(RetrievalKind::Semantic),
        tail_b in doc_list(RetrievalKind::Lexical),
        k_const in 1u32..200,
    ) {
        // A text at rank 0 of both lists earns 2/(k+1); any other text is
        // capped at 2/(k+2), so the lead is strict for every k.
        let shared = "공유 문서";
        let mut semantic =
            vec![RetrievedDocument::new(shared, "공유.pdf", 0.9, RetrievalKind::Semantic)];
        semantic.extend(tail_a);
        let mut lexical =
            vec![RetrievedDocument::new(shared, "공유.pdf", 3.1, RetrievalKind::Lexical)];
        lexical.extend(tail_b);

        let fused = fuse(&semantic, &lexical, k_const);

        prop_assert_eq!(fused[0].document.text.as_str(), shared);
        // Dedup keeps the record from the semantic list.
        prop_assert_eq!(fused[0].document.kind, RetrievalKind::Semantic);
    }

    #[test]
    fn empty_text_documents_never_survive_fusion(
        semantic in doc_list(RetrievalKind::Semantic),
        lexical in doc_list(RetrievalKind::Lexical),
    ) {
        let mut semantic = semantic;
        semantic.insert(
            0,
            RetrievedDocument::new("", "빈문서.pdf", 0.9, RetrievalKind::Semantic),
        );

        let fused = fuse(&semantic, &lexical, 60);
        prop_assert!(fused.iter().all(|f| !f.document.text.is_empty()));
    }

    #[test]
    fn normalized_score_is_never_negative(raw in -10.0f64..10.0) {
        prop_assert!(normalize_cosine_score(raw) >= 0.0);
    }

    #[test]
    fn unit_interval_similarity_passes_through(raw in 0.0f64..=1.0) {
        prop_assert_eq!(normalize_cosine_score(raw), raw);
    }

    #[test]
    fn distance_style_scores_clamp_to_zero(raw in 1.0f64..100.0) {
        prop_assume!(raw > 1.0);
        prop_assert_eq!(normalize_cosine_score(raw), 0.0);
    }
}
