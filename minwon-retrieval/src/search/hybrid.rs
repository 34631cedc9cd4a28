//! The hybrid searcher: both adapters in parallel, then rank fusion.
//!
//! Per-adapter failure degrades to an empty list and the pipeline
//! continues; only both adapters failing at once is an error. When the
//! lexical side returns nothing there is nothing to fuse against, so the
//! semantic ranking passes through unchanged.

use tracing::{debug, warn};

use minwon_core::config::RetrievalConfig;
use minwon_core::errors::RetrievalError;
use minwon_core::models::RetrievedDocument;
use minwon_core::traits::{LexicalSearch, SimilaritySearch};
use minwon_core::MinwonResult;

use super::rrf_fusion;

/// Two-channel evidence retrieval with reciprocal-rank fusion.
pub struct HybridSearcher<'a> {
    semantic: &'a dyn SimilaritySearch,
    lexical: &'a dyn LexicalSearch,
    config: &'a RetrievalConfig,
}

impl<'a> HybridSearcher<'a> {
    pub fn new(
        semantic: &'a dyn SimilaritySearch,
        lexical: &'a dyn LexicalSearch,
        config: &'a RetrievalConfig,
    ) -> Self {
        Self {
            semantic,
            lexical,
            config,
        }
    }

    /// Retrieve the fused top `k` documents for `query`.
    ///
    /// Each adapter is over-fetched (`k * fetch_multiplier`) so the fused
    /// ranking has headroom before truncation.
    pub fn search(&self, query: &str, k: usize) -> MinwonResult<Vec<RetrievedDocument>> {
        let fetch = k * self.config.fetch_multiplier.max(1);

        let (semantic_result, lexical_result) = rayon::join(
            || self.semantic.search(query, fetch),
            || self.lexical.search(query, fetch),
        );

        let (semantic_docs, lexical_docs) = match (semantic_result, lexical_result) {
            (Err(semantic_err), Err(lexical_err)) => {
                return Err(RetrievalError::SearchFailed {
                    reason: format!("semantic: {semantic_err}; lexical: {lexical_err}"),
                }
                .into());
            }
            (Ok(semantic_docs), Ok(lexical_docs)) => (semantic_docs, lexical_docs),
            (Ok(semantic_docs), Err(lexical_err)) => {
                warn!(error = %lexical_err, "lexical adapter failed; continuing with semantic only");
                (semantic_docs, Vec::new())
            }
            (Err(semantic_err), Ok(lexical_docs)) => {
                warn!(error = %semantic_err, "semantic adapter failed; continuing with lexical only");
                (Vec::new(), lexical_docs)
            }
        };

        debug!(
            semantic = semantic_docs.len(),
            lexical = lexical_docs.len(),
            fetch,
            "adapters returned"
        );

        if lexical_docs.is_empty() {
            let mut documents = semantic_docs;
            documents.truncate(k);
            return Ok(documents);
        }

        let fused = rrf_fusion::fuse(&semantic_docs, &lexical_docs, self.config.rrf_k);
        let documents: Vec<RetrievedDocument> =
            fused.into_iter().take(k).map(|f| f.document).collect();

        debug!(results = documents.len(), "hybrid search complete");
        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minwon_core::models::RetrievalKind;

    struct FixedSemantic(Vec<RetrievedDocument>);

    impl SimilaritySearch for FixedSemantic {
        fn search(&self, _query: &str, k: usize) -> MinwonResult<Vec<RetrievedDocument>> {
            Ok(self.0.iter().take(k).cloned().collect())
        }
    }

    struct FixedLexical(Vec<RetrievedDocument>);

    impl LexicalSearch for FixedLexical {
        fn search(&self, _query: &str, k: usize) -> MinwonResult<Vec<RetrievedDocument>> {
            Ok(self.0.iter().take(k).cloned().collect())
        }
    }

    struct FailingSemantic;

    impl SimilaritySearch for FailingSemantic {
        fn search(&self, _query: &str, _k: usize) -> MinwonResult<Vec<RetrievedDocument>> {
            Err(RetrievalError::SearchFailed {
                reason: "semantic down".into(),
            }
            .into())
        }
    }

    struct FailingLexical;

    impl LexicalSearch for FailingLexical {
        fn search(&self, _query: &str, _k: usize) -> MinwonResult<Vec<RetrievedDocument>> {
            Err(RetrievalError::SearchFailed {
                reason: "lexical down".into(),
            }
            .into())
        }
    }

    fn sem(text: &str, score: f64) -> RetrievedDocument {
        RetrievedDocument::new(text, format!("{text}.pdf"), score, RetrievalKind::Semantic)
    }

    fn lex(text: &str, score: f64) -> RetrievedDocument {
        RetrievedDocument::new(text, format!("{text}.pdf"), score, RetrievalKind::Lexical)
    }

    #[test]
    fn empty_lexical_passes_semantic_through_unchanged() {
        let semantic = FixedSemantic(vec![sem("일번", 0.9), sem("이번", 0.8), sem("삼번", 0.7)]);
        let lexical = FixedLexical(Vec::new());
        let config = RetrievalConfig::default();

        let searcher = HybridSearcher::new(&semantic, &lexical, &config);
        let docs = searcher.search("질의", 2).unwrap();

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].text, "일번");
        assert_eq!(docs[1].text, "이번");
    }

    #[test]
    fn fuses_and_truncates_to_k() {
        let semantic = FixedSemantic(vec![sem("일번", 0.9), sem("공통", 0.8)]);
        let lexical = FixedLexical(vec![lex("공통", 7.0), lex("사번", 3.0)]);
        let config = RetrievalConfig::default();

        let searcher = HybridSearcher::new(&semantic, &lexical, &config);
        let docs = searcher.search("질의", 2).unwrap();

        assert_eq!(docs.len(), 2);
        // 공통 scored from both lists, so it leads the fused ranking.
        assert_eq!(docs[0].text, "공통");
        assert_eq!(docs[0].kind, RetrievalKind::Semantic);
    }

    #[test]
    fn single_adapter_failure_degrades() {
        let lexical = FixedLexical(vec![lex("키워드", 5.0)]);
        let config = RetrievalConfig::default();

        let searcher = HybridSearcher::new(&FailingSemantic, &lexical, &config);
        let docs = searcher.search("질의", 3).unwrap();

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].text, "키워드");
    }

    #[test]
    fn both_adapters_failing_is_an_error() {
        let config = RetrievalConfig::default();
        let searcher = HybridSearcher::new(&FailingSemantic, &FailingLexical, &config);

        let result = searcher.search("질의", 3);
        assert!(result.is_err());
    }
}
