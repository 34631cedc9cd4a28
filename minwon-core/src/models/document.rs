use serde::{Deserialize, Serialize};

/// Which retrieval path produced a document.
///
/// The two paths score on incompatible scales, so every consumer that
/// interprets `score` must branch on this discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetrievalKind {
    /// Vector similarity search. `score` is normalized cosine similarity,
    /// higher is better, never negative.
    Semantic,
    /// BM25 keyword search. `score` is a raw BM25 value, unbounded above.
    Lexical,
}

impl RetrievalKind {
    /// Label used in source detail strings.
    pub fn label(self) -> &'static str {
        match self {
            Self::Semantic => "VECTOR",
            Self::Lexical => "BM25",
        }
    }
}

/// One evidence document returned by a retrieval adapter.
///
/// Lives only for the duration of one request; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedDocument {
    /// Document body.
    pub text: String,
    /// Origin identifier, e.g. the statute filename.
    pub source: String,
    /// Adapter score. Interpretation depends on `kind`.
    pub score: f64,
    /// Retrieval path that produced this document.
    pub kind: RetrievalKind,
}

impl RetrievedDocument {
    pub fn new(
        text: impl Into<String>,
        source: impl Into<String>,
        score: f64,
        kind: RetrievalKind,
    ) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
            score,
            kind,
        }
    }

    /// Basename of `source`. Adapters may report full paths; scoring and
    /// source details always work on the filename alone.
    pub fn file_name(&self) -> &str {
        self.source.rsplit(['/', '\\']).next().unwrap_or(&self.source)
    }

    /// Source detail string carried into `Classification::sources`,
    /// e.g. `도로교통법.pdf (VECTOR: 0.8123)`.
    pub fn source_detail(&self) -> String {
        format!("{} ({}: {:.4})", self.file_name(), self.kind.label(), self.score)
    }
}

/// A retrieved document plus its rank-fusion score.
///
/// Invariant: `fusion_score` derives solely from the document's rank
/// positions in the contributing lists, never from raw adapter scores.
#[derive(Debug, Clone)]
pub struct FusedDocument {
    pub document: RetrievedDocument,
    /// Summed reciprocal-rank contribution (higher = more relevant).
    pub fusion_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_detail_formats_score_to_four_places() {
        let doc = RetrievedDocument::new("본문", "도로교통법.pdf", 0.81234, RetrievalKind::Semantic);
        assert_eq!(doc.source_detail(), "도로교통법.pdf (VECTOR: 0.8123)");
    }

    #[test]
    fn lexical_label() {
        let doc = RetrievedDocument::new("본문", "환경법.pdf", 12.5, RetrievalKind::Lexical);
        assert_eq!(doc.source_detail(), "환경법.pdf (BM25: 12.5000)");
    }

    #[test]
    fn file_name_strips_directories() {
        let doc = RetrievedDocument::new(
            "본문",
            "rag_data/laws/도로교통법.pdf",
            0.5,
            RetrievalKind::Semantic,
        );
        assert_eq!(doc.file_name(), "도로교통법.pdf");
        assert_eq!(doc.source_detail(), "도로교통법.pdf (VECTOR: 0.5000)");
    }
}
