//! Per-document evidence scoring.
//!
//! Each retrieved document is attributed to one agency and contributes a
//! weight to the scoreboard. Attribution prefers the source identifier
//! over the body, and the query hint both rescues unattributed documents
//! and rewards corroborating ones.

use minwon_core::config::DecisionPolicy;
use minwon_core::models::{AgencyScoreboard, RetrievalKind, RetrievedDocument};
use tracing::debug;

/// Score each document onto the scoreboard. Returns the source detail
/// strings of the documents that scored, in retrieval order.
///
/// Weight per document:
/// - base 1.0, plus the normalized semantic score, or the damped lexical
///   score `min(1.0, raw / damping)`;
/// - semantic documents below the noise threshold are dropped outright;
/// - keyword attribution checks the source identifier first (earning the
///   source-match bonus), then a leading snippet of the body;
/// - broad-law sources redirect their attribution to the hint agency and
///   are damped by the penalty factor, since generic statutes are weak
///   evidence for any specific agency;
/// - an unattributed document falls back to the hint agency with a small
///   bonus; attribution agreeing with the hint earns a larger one.
pub fn score_documents(
    board: &mut AgencyScoreboard,
    hint: Option<&str>,
    documents: &[RetrievedDocument],
    policy: &DecisionPolicy,
) -> Vec<String> {
    let mut details = Vec::with_capacity(documents.len());

    for doc in documents {
        let file_name = doc.file_name();

        let mut weight = 1.0;
        match doc.kind {
            RetrievalKind::Semantic => {
                if doc.score < policy.min_semantic_score {
                    debug!(
                        source = %doc.source,
                        score = doc.score,
                        "semantic evidence below noise threshold, dropped"
                    );
                    continue;
                }
                weight += doc.score;
            }
            RetrievalKind::Lexical => {
                weight += (doc.score / policy.lexical_damping).min(1.0);
            }
        }

        let broad_law = policy
            .broad_laws
            .iter()
            .any(|law| file_name.contains(law.as_str()));

        let mut attributed: Option<&str> = None;
        for rule in &policy.keyword_table {
            if file_name.contains(rule.keyword.as_str()) {
                attributed = Some(rule.agency.as_str());
                weight += policy.source_match_bonus;
                break;
            }
        }
        if attributed.is_none() {
            let snippet = leading_chars(&doc.text, policy.snippet_len);
            for rule in &policy.keyword_table {
                if snippet.contains(rule.keyword.as_str()) {
                    attributed = Some(rule.agency.as_str());
                    break;
                }
            }
        }

        if broad_law {
            if hint.is_some() {
                attributed = hint;
            }
            weight *= policy.broad_law_penalty;
        }

        if attributed.is_none() {
            if let Some(hint_agency) = hint {
                attributed = Some(hint_agency);
                weight += policy.hint_fallback_bonus;
            }
        } else if attributed == hint {
            weight += policy.agreement_bonus;
        }

        let agency = attributed.unwrap_or(policy.fallback_agency.as_str());
        board.add(agency, weight);
        details.push(doc.source_detail());
    }

    details
}

/// Leading `max_chars` characters of `text` (the whole text if shorter).
fn leading_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
