//! In-memory exact cosine index.
//!
//! Holds precomputed embeddings and scans them exhaustively per query.
//! Meant for local runs and tests; production points at a remote index.

use minwon_core::errors::RetrievalError;
use minwon_core::traits::{VectorHit, VectorIndex};
use minwon_core::MinwonResult;

struct IndexEntry {
    text: String,
    source: String,
    embedding: Vec<f32>,
}

/// Exact cosine nearest-neighbor search over in-memory vectors.
pub struct CosineVectorIndex {
    dimensions: usize,
    entries: Vec<IndexEntry>,
}

impl CosineVectorIndex {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            entries: Vec::new(),
        }
    }

    /// Build an index from precomputed `(text, source, embedding)` entries.
    pub fn from_entries(
        dimensions: usize,
        entries: Vec<(String, String, Vec<f32>)>,
    ) -> Result<Self, RetrievalError> {
        let mut index = Self::new(dimensions);
        for (text, source, embedding) in entries {
            index.insert(text, source, embedding)?;
        }
        Ok(index)
    }

    /// Add one embedded document.
    pub fn insert(
        &mut self,
        text: String,
        source: String,
        embedding: Vec<f32>,
    ) -> Result<(), RetrievalError> {
        if embedding.len() != self.dimensions {
            return Err(RetrievalError::DimensionMismatch {
                expected: self.dimensions,
                actual: embedding.len(),
            });
        }
        self.entries.push(IndexEntry {
            text,
            source,
            embedding,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn cosine(a: &[f32], b: &[f32]) -> f64 {
        let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm_a <= f32::EPSILON || norm_b <= f32::EPSILON {
            return 0.0;
        }
        (dot / (norm_a * norm_b)) as f64
    }
}

impl VectorIndex for CosineVectorIndex {
    fn search(&self, embedding: &[f32], k: usize) -> MinwonResult<Vec<VectorHit>> {
        if embedding.len() != self.dimensions {
            return Err(RetrievalError::DimensionMismatch {
                expected: self.dimensions,
                actual: embedding.len(),
            }
            .into());
        }

        let mut hits: Vec<VectorHit> = self
            .entries
            .iter()
            .map(|entry| VectorHit {
                text: entry.text.clone(),
                source: entry.source.clone(),
                raw_score: Self::cosine(embedding, &entry.embedding),
            })
            .collect();

        // Stable sort: ties keep insertion order.
        hits.sort_by(|a, b| {
            b.raw_score
                .partial_cmp(&a.raw_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits.truncate(k);
        Ok(hits)
    }

    fn name(&self) -> &str {
        "memory-cosine"
    }

    fn is_available(&self) -> bool {
        true
    }
}
