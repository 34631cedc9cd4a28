use minwon_core::config::DecisionPolicy;
use minwon_core::models::{AgencyScoreboard, Confidence};
use minwon_core::title;
use proptest::prelude::*;

proptest! {
    #[test]
    fn confidence_is_always_in_unit_interval(v in -10.0f64..10.0) {
        let c = Confidence::new(v);
        prop_assert!((0.0..=1.0).contains(&c.value()));
    }

    #[test]
    fn rounded_confidence_has_two_decimals(v in 0.0f64..1.0) {
        let c = Confidence::rounded(v);
        let scaled = c.value() * 100.0;
        prop_assert!(
            (scaled - scaled.round()).abs() < 1e-9,
            "not a two-decimal value: {}",
            c.value()
        );
    }

    #[test]
    fn scoreboard_total_equals_sum_of_adds(weights in prop::collection::vec(0.0f64..5.0, 1..20)) {
        let mut board = AgencyScoreboard::new();
        for (i, w) in weights.iter().enumerate() {
            // Spread across three agencies so accumulation paths are mixed.
            let agency = match i % 3 {
                0 => "경찰청",
                1 => "환경부",
                _ => "기타",
            };
            board.add(agency, *w);
        }
        let expected: f64 = weights.iter().sum();
        prop_assert!((board.total() - expected).abs() < 1e-9);
    }

    #[test]
    fn ranked_is_sorted_descending(weights in prop::collection::vec(0.0f64..5.0, 1..10)) {
        let mut board = AgencyScoreboard::new();
        for (i, w) in weights.iter().enumerate() {
            board.add(&format!("기관{i}"), *w);
        }
        let ranked = board.ranked();
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn cap_never_raises_a_score(initial in 0.0f64..5.0, ceiling in 0.0f64..5.0) {
        let mut board = AgencyScoreboard::new();
        board.add("행정안전부", initial);
        board.cap("행정안전부", ceiling);
        prop_assert!((board.get("행정안전부") - initial.min(ceiling)).abs() < 1e-12);
    }

    #[test]
    fn normalize_text_collapses_all_whitespace(s in "[가-힣 ]{0,80}") {
        let normalized = title::normalize_text(&s);
        prop_assert!(!normalized.contains("  "), "double space in {normalized:?}");
        prop_assert_eq!(normalized.trim(), normalized.as_str());
    }

    #[test]
    fn summarize_never_panics_and_never_empty(s in ".{0,200}") {
        let summary = title::summarize_text(&s);
        // Whitespace-only bodies normalize to nothing; everything else
        // must produce some fragment, and empty bodies the placeholder.
        if s.is_empty() {
            prop_assert_eq!(summary, "민원 내용");
        }
    }
}

#[test]
fn every_registered_agency_code_is_in_range() {
    let policy = DecisionPolicy::default();
    for entry in &policy.agency_codes {
        assert!(
            (18..=38).contains(&entry.code),
            "{} has out-of-range code {}",
            entry.agency,
            entry.code
        );
    }
}

#[test]
fn keyword_table_agencies_all_resolve_to_codes() {
    let policy = DecisionPolicy::default();
    for rule in &policy.keyword_table {
        assert!(
            policy.agency_code(&rule.agency).is_some(),
            "keyword {} maps to unregistered agency {}",
            rule.keyword,
            rule.agency
        );
    }
}
