//! Property tests for the decision layer.
//!
//! Locks the two safety guarantees: the institutional gate can never be
//! out-accumulated, and no specific agency is ever returned without
//! passing both the confidence floor and the gap floor.

use minwon_core::config::{DecisionPolicy, MinwonConfig};
use minwon_core::errors::MinwonResult;
use minwon_core::models::{AgencyScoreboard, Confidence, RetrievedDocument};
use minwon_core::traits::{Classifier, LexicalSearch, SimilaritySearch};
use minwon_decision::gate::apply_institutional_gate;
use minwon_decision::verdict::decide;
use minwon_decision::RoutingEngine;
use proptest::prelude::*;

struct PanickingSemantic;

impl SimilaritySearch for PanickingSemantic {
    fn search(&self, _query: &str, _k: usize) -> MinwonResult<Vec<RetrievedDocument>> {
        panic!("semantic retrieval must not run for a hard-rule query");
    }
}

struct PanickingLexical;

impl LexicalSearch for PanickingLexical {
    fn search(&self, _query: &str, _k: usize) -> MinwonResult<Vec<RetrievedDocument>> {
        panic!("lexical retrieval must not run for a hard-rule query");
    }
}

/// Scoreboards over a small agency pool; duplicates accumulate, as they
/// do in real scoring.
fn scoreboard() -> impl Strategy<Value = AgencyScoreboard> {
    let agencies = [
        "경찰청",
        "국토교통부",
        "소방청",
        "교육부",
        "행정안전부",
        "기타",
    ];
    prop::collection::vec((0usize..agencies.len(), 0.01f64..5.0), 1..6).prop_map(move |entries| {
        let mut board = AgencyScoreboard::new();
        for (idx, score) in entries {
            board.add(agencies[idx], score);
        }
        board
    })
}

proptest! {
    #[test]
    fn gate_never_lets_the_capped_agency_exceed_the_ceiling(
        initial in 0.0f64..10.0,
        // ASCII queries can never contain a Korean context term.
        query in "[a-z ]{0,24}",
    ) {
        let policy = DecisionPolicy::default();
        let mut board = AgencyScoreboard::new();
        board.add(&policy.institutional_agency, initial);

        apply_institutional_gate(&query, &mut board, &policy);

        let expected = initial.min(policy.institutional_score_cap);
        prop_assert!((board.get(&policy.institutional_agency) - expected).abs() < 1e-12);
    }

    #[test]
    fn gate_touches_no_other_agency(
        initial in 0.0f64..10.0,
        query in "[a-z ]{0,24}",
    ) {
        let policy = DecisionPolicy::default();
        let mut board = AgencyScoreboard::new();
        board.add("경찰청", initial);

        apply_institutional_gate(&query, &mut board, &policy);

        prop_assert_eq!(board.get("경찰청"), initial);
        prop_assert_eq!(board.len(), 1);
    }

    #[test]
    fn specific_verdicts_always_pass_both_floors(board in scoreboard()) {
        let policy = DecisionPolicy::default();
        let verdict = decide(&board, &policy);

        if verdict.agency != policy.fallback_agency {
            prop_assert!(verdict.confidence.value() >= policy.confidence_floor);
            prop_assert!(verdict.gap >= policy.gap_floor);
        }
    }

    #[test]
    fn verdict_confidence_is_the_rounded_winning_share(board in scoreboard()) {
        let policy = DecisionPolicy::default();
        let verdict = decide(&board, &policy);

        let ranked = board.ranked();
        let expected = Confidence::rounded(ranked[0].1 / board.total());
        prop_assert_eq!(verdict.confidence, expected);
        prop_assert!(verdict.confidence.value() >= 0.0 && verdict.confidence.value() <= 1.0);
        prop_assert!(verdict.gap >= 0.0);
    }

    #[test]
    fn failing_either_floor_forces_the_fallback_agency(board in scoreboard()) {
        let policy = DecisionPolicy::default();

        let ranked = board.ranked();
        let best = ranked[0].1;
        let second = ranked.get(1).map(|e| e.1).unwrap_or(0.0);
        let confidence = Confidence::rounded(best / board.total());
        prop_assume!(
            confidence.value() < policy.confidence_floor || best - second < policy.gap_floor
        );

        let verdict = decide(&board, &policy);
        prop_assert_eq!(verdict.agency, policy.fallback_agency);
    }

    #[test]
    fn hard_rule_fires_regardless_of_surrounding_text(
        prefix in "[a-z ]{0,12}",
        suffix in "[a-z ]{0,12}",
    ) {
        let config = MinwonConfig::default();
        let engine = RoutingEngine::new(&PanickingSemantic, &PanickingLexical, &config);

        let query = format!("{prefix}불법 주정차 단속{suffix}");
        let c = engine.classify(&query).unwrap();

        prop_assert_eq!(c.agency_name.as_str(), "경찰청");
        prop_assert_eq!(c.confidence, Confidence::CERTAIN);
        prop_assert!(c.sources.is_empty());
    }
}
