//! Institutional over-prediction gate.
//!
//! Generic statutes surface for nearly every complaint, and their
//! attribution defaults toward the general-administration ministry. The
//! gate caps that agency's score unless the query itself carries context
//! for it, so the structural bias can never produce a winner on its own.

use minwon_core::config::DecisionPolicy;
use minwon_core::models::AgencyScoreboard;
use tracing::debug;

/// Cap the institutional agency's score at the configured ceiling when the
/// query contains none of its context terms.
pub fn apply_institutional_gate(
    query: &str,
    board: &mut AgencyScoreboard,
    policy: &DecisionPolicy,
) {
    let has_context = policy
        .institutional_context_terms
        .iter()
        .any(|term| query.contains(term.as_str()));
    if has_context {
        return;
    }

    let before = board.get(&policy.institutional_agency);
    board.cap(&policy.institutional_agency, policy.institutional_score_cap);
    if board.get(&policy.institutional_agency) < before {
        debug!(
            agency = %policy.institutional_agency,
            before,
            cap = policy.institutional_score_cap,
            "institutional gate applied"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_without_context() {
        let policy = DecisionPolicy::default();
        let mut board = AgencyScoreboard::new();
        board.add("행정안전부", 2.4);

        apply_institutional_gate("가로등이 고장났어요", &mut board, &policy);

        assert_eq!(board.get("행정안전부"), 0.8);
    }

    #[test]
    fn context_term_lifts_the_gate() {
        let policy = DecisionPolicy::default();
        let mut board = AgencyScoreboard::new();
        board.add("행정안전부", 2.4);

        apply_institutional_gate("전입신고 처리가 안 됩니다", &mut board, &policy);

        assert_eq!(board.get("행정안전부"), 2.4);
    }

    #[test]
    fn scores_below_the_cap_are_untouched() {
        let policy = DecisionPolicy::default();
        let mut board = AgencyScoreboard::new();
        board.add("행정안전부", 0.5);

        apply_institutional_gate("가로등이 고장났어요", &mut board, &policy);

        assert_eq!(board.get("행정안전부"), 0.5);
    }

    #[test]
    fn never_inserts_the_gated_agency() {
        let policy = DecisionPolicy::default();
        let mut board = AgencyScoreboard::new();
        board.add("경찰청", 3.0);

        apply_institutional_gate("가로등이 고장났어요", &mut board, &policy);

        assert_eq!(board.get("행정안전부"), 0.0);
        assert_eq!(board.len(), 1);
    }
}
