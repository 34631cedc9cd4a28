//! RoutingEngine: implements Classifier, orchestrates the decision pipeline.
//!
//! hard rule → hybrid retrieval → hint inference → evidence scoring →
//! institutional gate → verdict with fallback.

use minwon_core::config::MinwonConfig;
use minwon_core::errors::MinwonResult;
use minwon_core::models::{AgencyScoreboard, Classification, Confidence};
use minwon_core::traits::{Classifier, LexicalSearch, SimilaritySearch};
use minwon_retrieval::HybridSearcher;
use tracing::{debug, info};

use crate::{gate, hard_rules, hints, scoring, verdict};

/// The main decision engine. Both retrieval adapters are injected, so the
/// engine itself is pure policy over their output.
pub struct RoutingEngine<'a> {
    semantic: &'a dyn SimilaritySearch,
    lexical: &'a dyn LexicalSearch,
    config: &'a MinwonConfig,
}

impl<'a> RoutingEngine<'a> {
    pub fn new(
        semantic: &'a dyn SimilaritySearch,
        lexical: &'a dyn LexicalSearch,
        config: &'a MinwonConfig,
    ) -> Self {
        Self {
            semantic,
            lexical,
            config,
        }
    }
}

impl Classifier for RoutingEngine<'_> {
    fn classify(&self, query: &str) -> MinwonResult<Classification> {
        let policy = &self.config.decision;

        // Step 1: Hard rule bypasses retrieval for unambiguous vocabulary.
        if let Some(classification) = hard_rules::check(query, policy) {
            info!(
                agency = %classification.agency_name,
                "hard rule fired, retrieval bypassed"
            );
            return Ok(classification);
        }

        debug!(query, "classification request");

        // Step 2: Hybrid retrieval for the evidence documents.
        let searcher = HybridSearcher::new(self.semantic, self.lexical, &self.config.retrieval);
        let documents = searcher.search(query, self.config.retrieval.top_k)?;

        if documents.is_empty() {
            debug!("no evidence retrieved");
            let (agency_code, category) = verdict::resolve_codes(policy, &policy.fallback_agency);
            return Ok(Classification {
                agency_code,
                agency_name: policy.fallback_agency.clone(),
                category,
                confidence: Confidence::ZERO,
                reasoning: "관련 법령 검색 결과가 없습니다.".to_string(),
                sources: Vec::new(),
            });
        }

        // Step 3: Query hint seeds the scoreboard.
        let hint = hints::infer_hint_agency(query, policy);
        let mut board = AgencyScoreboard::new();
        if let Some(hint_agency) = &hint {
            board.add(hint_agency, policy.hint_seed_bonus);
        }

        // Step 4: Per-document evidence scoring.
        let sources = scoring::score_documents(&mut board, hint.as_deref(), &documents, policy);

        // Step 5: Institutional gate.
        gate::apply_institutional_gate(query, &mut board, policy);

        // Step 6: Verdict with fallback.
        let verdict = verdict::decide(&board, policy);

        let top_scores: Vec<(&str, f64)> = board.ranked().into_iter().take(5).collect();
        info!(
            query,
            hint = hint.as_deref().unwrap_or("-"),
            top_scores = ?top_scores,
            agency = %verdict.agency,
            confidence = %verdict.confidence,
            gap = verdict.gap,
            top_sources = ?sources.iter().take(3).collect::<Vec<_>>(),
            "analysis report"
        );

        Ok(verdict::build_classification(
            &verdict,
            policy,
            sources,
            documents[0].file_name(),
        ))
    }
}
