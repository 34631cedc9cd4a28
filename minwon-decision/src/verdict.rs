//! Final decision with fallback.
//!
//! Ambiguous evidence must never produce a confident specific answer: a
//! winning share below the confidence floor, or a winner margin below the
//! gap floor, downgrades the verdict to the catch-all agency while keeping
//! the numeric confidence for diagnostics.

use minwon_core::config::{defaults, DecisionPolicy};
use minwon_core::models::{AgencyScoreboard, Classification, Confidence};
use tracing::warn;

/// Scoreboard readout, before rendering the wire classification.
#[derive(Debug, Clone)]
pub struct Verdict {
    /// Winning agency, or the catch-all when the floors were not met.
    pub agency: String,
    /// Raw score of the best agency (diagnostic).
    pub best_score: f64,
    /// Best score as a share of the total, rounded to two decimals.
    pub confidence: Confidence,
    /// Margin between the best and second-best agency. Equals the best
    /// score when only one agency scored.
    pub gap: f64,
}

/// Pick the best agency, or the catch-all when the evidence is too
/// diffuse to defend a specific answer.
///
/// Confidence is rounded before the floor comparison, so a share of 0.449
/// passes a 0.45 floor.
pub fn decide(board: &AgencyScoreboard, policy: &DecisionPolicy) -> Verdict {
    if board.is_empty() {
        return Verdict {
            agency: policy.fallback_agency.clone(),
            best_score: 0.0,
            confidence: Confidence::ZERO,
            gap: 0.0,
        };
    }

    let ranked = board.ranked();
    let (best_agency, best_score) = ranked[0];
    let second_score = ranked.get(1).map(|entry| entry.1).unwrap_or(0.0);
    let total = board.total();

    let confidence = if total > 0.0 {
        Confidence::rounded(best_score / total)
    } else {
        Confidence::ZERO
    };
    let gap = best_score - second_score;

    let agency = if confidence.value() < policy.confidence_floor || gap < policy.gap_floor {
        policy.fallback_agency.clone()
    } else {
        best_agency.to_string()
    };

    Verdict {
        agency,
        best_score,
        confidence,
        gap,
    }
}

/// Resolve an agency to its wire code and UI category, tolerating gaps in
/// either table: a missing code falls back to the catch-all agency's code,
/// a missing category to the fallback category, each with a warning.
pub fn resolve_codes(policy: &DecisionPolicy, agency: &str) -> (i64, String) {
    let code = match policy.agency_code(agency) {
        Some(code) => code,
        None => {
            warn!(agency, "agency missing from code table, using fallback code");
            policy
                .agency_code(&policy.fallback_agency)
                .unwrap_or(defaults::FALLBACK_AGENCY_CODE)
        }
    };
    let category = match policy.category(code) {
        Some(category) => category.to_string(),
        None => {
            warn!(code, "code missing from category table, using fallback category");
            policy.fallback_category.clone()
        }
    };
    (code, category)
}

/// Whether the decisive evidence reads as statute text or as a curated
/// complaint case example, judged from the top document's file name.
fn evidence_basis(top_file_name: &str) -> &'static str {
    if top_file_name.ends_with(".pdf") || top_file_name.contains("법") {
        "(근거: 법령 문서 매칭)"
    } else {
        "(근거: 민원 사례 매칭)"
    }
}

/// Render a verdict into the wire classification.
pub fn build_classification(
    verdict: &Verdict,
    policy: &DecisionPolicy,
    sources: Vec<String>,
    top_file_name: &str,
) -> Classification {
    let (agency_code, category) = resolve_codes(policy, &verdict.agency);

    let reasoning = if verdict.agency == policy.fallback_agency {
        format!(
            "근거가 분산되거나(애매함) 범용 법령 비중이 높아 특정 기관으로 단정하기 어려워 '{}'로 분류했습니다.",
            policy.fallback_agency
        )
    } else {
        format!(
            "검색 결과 및 질의 힌트 기반 점수 합산 결과, '{}'가(이) 가장 적합한 소관 기관으로 판단되었습니다. {}",
            verdict.agency,
            evidence_basis(top_file_name)
        )
    };

    Classification {
        agency_code,
        agency_name: verdict.agency.clone(),
        category,
        confidence: verdict.confidence,
        reasoning,
        sources,
    }
}
