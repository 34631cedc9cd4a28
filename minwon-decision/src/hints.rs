//! Query-hint inference.
//!
//! Retrieval surfaces statute text, but the complaint's own vocabulary is
//! often the stronger signal. The first containment match over the ordered
//! keyword table becomes the hint agency; the engine seeds the scoreboard
//! with it so noisy evidence cannot drown a clearly-worded query.

use minwon_core::config::DecisionPolicy;

/// Hint agency for `query`, or `None` when the query names nothing the
/// keyword table knows.
///
/// Table order is decisive: the first matching entry wins, so narrower
/// keywords shadow broader ones. A weak food-safety indicator upgrades the
/// hint to the food-safety agency only when a food-context term co-occurs,
/// overriding any table match.
pub fn infer_hint_agency(query: &str, policy: &DecisionPolicy) -> Option<String> {
    let mut hint = policy
        .keyword_table
        .iter()
        .find(|rule| query.contains(rule.keyword.as_str()))
        .map(|rule| rule.agency.clone())
        .filter(|agency| agency != &policy.fallback_agency);

    let weak = policy
        .weak_food_terms
        .iter()
        .any(|term| query.contains(term.as_str()));
    let context = policy
        .food_context_terms
        .iter()
        .any(|term| query.contains(term.as_str()));
    if weak && context {
        hint = Some(policy.conditional_upgrade_agency.clone());
    }

    hint
}
