use serde::{Deserialize, Serialize};

use super::defaults;

/// One entry of the ordered keyword → agency table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordRule {
    pub keyword: String,
    pub agency: String,
}

/// One entry of the agency → code table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgencyCode {
    pub agency: String,
    pub code: i64,
}

/// One entry of the code → UI category table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRule {
    pub code: i64,
    pub category: String,
}

/// Retrieval-bypassing shortcut for unambiguous complaint vocabulary.
///
/// Fires when `trigger` and any of `co_terms` both appear in the query
/// (whitespace-insensitive), routing straight to `agency` at confidence 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HardRule {
    pub trigger: String,
    pub co_terms: Vec<String>,
    pub agency: String,
}

impl Default for HardRule {
    fn default() -> Self {
        Self {
            trigger: defaults::HARD_RULE_TRIGGER.to_string(),
            co_terms: defaults::HARD_RULE_CO_TERMS
                .iter()
                .map(|t| t.to_string())
                .collect(),
            agency: defaults::HARD_RULE_AGENCY.to_string(),
        }
    }
}

/// Decision-layer policy: keyword tables, agency registry, and tunables.
///
/// Loaded once at startup and read-only afterwards; concurrent requests
/// consult it without coordination. `keyword_table` is an ordered list
/// scanned linearly — first containment match wins, so table order is a
/// load-time contract, not an incidental iteration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionPolicy {
    /// Ordered keyword → agency table (first match wins).
    pub keyword_table: Vec<KeywordRule>,
    /// Agency → numeric code.
    pub agency_codes: Vec<AgencyCode>,
    /// Code → UI category.
    pub categories: Vec<CategoryRule>,
    /// Source identifiers of generic cross-cutting statutes.
    pub broad_laws: Vec<String>,
    /// Weight multiplier for broad-law evidence (strong damping).
    pub broad_law_penalty: f64,
    /// Agency guarded against structural over-prediction.
    pub institutional_agency: String,
    /// Query terms that establish genuine context for that agency.
    pub institutional_context_terms: Vec<String>,
    /// Score ceiling applied when no context term is present.
    pub institutional_score_cap: f64,
    /// Minimum winning share of the scoreboard.
    pub confidence_floor: f64,
    /// Minimum top1 − top2 margin.
    pub gap_floor: f64,
    /// Semantic documents below this normalized score are skipped as noise.
    /// Set to 0.0 to disable the filter.
    pub min_semantic_score: f64,
    /// Weak indicators that upgrade the hint only with supporting context.
    pub weak_food_terms: Vec<String>,
    /// Context terms that legitimize a weak indicator.
    pub food_context_terms: Vec<String>,
    /// Agency the conditional upgrade selects.
    pub conditional_upgrade_agency: String,
    /// Scoreboard seed for the hint agency.
    pub hint_seed_bonus: f64,
    /// Bonus for a keyword match on the source identifier.
    pub source_match_bonus: f64,
    /// Bonus when an unattributed document falls back to the hint.
    pub hint_fallback_bonus: f64,
    /// Bonus when attribution and hint agree.
    pub agreement_bonus: f64,
    /// Divisor damping raw lexical scores into document weights.
    pub lexical_damping: f64,
    /// Leading body characters scanned for keyword attribution.
    pub snippet_len: usize,
    /// Retrieval-bypassing hard rule.
    pub hard_rule: HardRule,
    /// Catch-all agency name for unclassifiable requests.
    pub fallback_agency: String,
    /// Category emitted when a code has no category mapping.
    pub fallback_category: String,
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        Self {
            keyword_table: defaults::KEYWORD_TO_AGENCY
                .iter()
                .map(|(keyword, agency)| KeywordRule {
                    keyword: keyword.to_string(),
                    agency: agency.to_string(),
                })
                .collect(),
            agency_codes: defaults::AGENCY_CODES
                .iter()
                .map(|(agency, code)| AgencyCode {
                    agency: agency.to_string(),
                    code: *code,
                })
                .collect(),
            categories: defaults::CODE_CATEGORIES
                .iter()
                .map(|(code, category)| CategoryRule {
                    code: *code,
                    category: category.to_string(),
                })
                .collect(),
            broad_laws: defaults::BROAD_LAWS.iter().map(|s| s.to_string()).collect(),
            broad_law_penalty: defaults::DEFAULT_BROAD_LAW_PENALTY,
            institutional_agency: defaults::INSTITUTIONAL_AGENCY.to_string(),
            institutional_context_terms: defaults::INSTITUTIONAL_CONTEXT_TERMS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            institutional_score_cap: defaults::DEFAULT_INSTITUTIONAL_SCORE_CAP,
            confidence_floor: defaults::DEFAULT_CONFIDENCE_FLOOR,
            gap_floor: defaults::DEFAULT_GAP_FLOOR,
            min_semantic_score: defaults::DEFAULT_MIN_SEMANTIC_SCORE,
            weak_food_terms: defaults::WEAK_FOOD_TERMS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            food_context_terms: defaults::FOOD_CONTEXT_TERMS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            conditional_upgrade_agency: defaults::CONDITIONAL_UPGRADE_AGENCY.to_string(),
            hint_seed_bonus: defaults::DEFAULT_HINT_SEED_BONUS,
            source_match_bonus: defaults::DEFAULT_SOURCE_MATCH_BONUS,
            hint_fallback_bonus: defaults::DEFAULT_HINT_FALLBACK_BONUS,
            agreement_bonus: defaults::DEFAULT_AGREEMENT_BONUS,
            lexical_damping: defaults::DEFAULT_LEXICAL_DAMPING,
            snippet_len: defaults::DEFAULT_SNIPPET_LEN,
            hard_rule: HardRule::default(),
            fallback_agency: defaults::FALLBACK_AGENCY.to_string(),
            fallback_category: defaults::FALLBACK_CATEGORY.to_string(),
        }
    }
}

impl DecisionPolicy {
    /// Numeric code for an agency, if the code table knows it.
    pub fn agency_code(&self, agency: &str) -> Option<i64> {
        self.agency_codes
            .iter()
            .find(|entry| entry.agency == agency)
            .map(|entry| entry.code)
    }

    /// UI category for a code, if the category table knows it.
    pub fn category(&self, code: i64) -> Option<&str> {
        self.categories
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.category.as_str())
    }
}
