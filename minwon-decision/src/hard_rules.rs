//! Retrieval-bypassing hard rule.
//!
//! Certain complaint types are unambiguous by vocabulary alone; retrieval
//! only adds noise for them. Matching is whitespace-insensitive so spaced
//! spellings like "주 정 차" still fire.

use minwon_core::config::DecisionPolicy;
use minwon_core::models::{Classification, Confidence};

use crate::verdict;

/// Whitespace-insensitive substring containment.
pub fn contains_ignore_space(text: &str, keyword: &str) -> bool {
    let strip = |s: &str| {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
    };
    strip(text).contains(&strip(keyword))
}

/// The finished classification when the hard rule fires for `query`;
/// `None` hands the request on to retrieval.
///
/// The rule requires the trigger term plus at least one co-occurring
/// enforcement term, both whitespace-insensitive.
pub fn check(query: &str, policy: &DecisionPolicy) -> Option<Classification> {
    let rule = &policy.hard_rule;

    if !contains_ignore_space(query, &rule.trigger) {
        return None;
    }
    if !rule
        .co_terms
        .iter()
        .any(|term| contains_ignore_space(query, term))
    {
        return None;
    }

    let (agency_code, category) = verdict::resolve_codes(policy, &rule.agency);
    Some(Classification {
        agency_code,
        agency_name: rule.agency.clone(),
        category,
        confidence: Confidence::CERTAIN,
        reasoning: format!(
            "주정차 단속·불법 주정차는 명확한 교통질서 위반 사안이므로, RAG 검색을 거치지 않고 {} 소관으로 즉시 분류합니다. (Hard Rule 적용)",
            rule.agency
        ),
        sources: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_across_whitespace() {
        assert!(contains_ignore_space("불법 주정차 신고합니다", "주정차"));
        assert!(contains_ignore_space("주 정 차 단속 요청", "주정차"));
        assert!(!contains_ignore_space("도로 파손 민원", "주정차"));
    }

    #[test]
    fn trigger_plus_co_term_fires() {
        let policy = DecisionPolicy::default();
        let c = check("불법 주정차 단속 신고합니다", &policy).unwrap();

        assert_eq!(c.agency_name, "경찰청");
        assert_eq!(c.agency_code, 18);
        assert_eq!(c.category, "경찰·검찰");
        assert_eq!(c.confidence, Confidence::CERTAIN);
        assert!(c.sources.is_empty());
    }

    #[test]
    fn trigger_alone_does_not_fire() {
        let policy = DecisionPolicy::default();
        assert!(check("주정차 공간이 부족합니다", &policy).is_none());
    }

    #[test]
    fn co_term_alone_does_not_fire() {
        let policy = DecisionPolicy::default();
        assert!(check("불법 현수막을 신고합니다", &policy).is_none());
    }

    #[test]
    fn spaced_out_trigger_still_fires() {
        let policy = DecisionPolicy::default();
        let c = check("주 정 차 위반 차량 조치 바랍니다", &policy).unwrap();
        assert_eq!(c.agency_name, "경찰청");
    }
}
