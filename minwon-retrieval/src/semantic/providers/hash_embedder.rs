//! Feature-hashing fallback embedder.
//!
//! Produces deterministic dense vectors by hashing terms into
//! fixed-dimension buckets and weighting by term frequency. Not as
//! semantically rich as a neural model, but always available — the engine
//! degrades instead of dying when no embedding service is reachable.

use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

use minwon_core::traits::EmbeddingBackend;
use minwon_core::MinwonResult;

/// Deterministic hashing embedder (FNV-1a bucketing).
pub struct HashEmbedder {
    dimensions: usize,
}

impl HashEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Hash a term into a bucket index using FNV-1a.
    fn hash_term(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dims
    }

    fn feature_vector(&self, text: &str) -> Vec<f32> {
        let tokens: Vec<String> = text.unicode_words().map(|w| w.to_lowercase()).collect();
        if tokens.is_empty() {
            return vec![0.0; self.dimensions];
        }

        let mut tf: HashMap<&str, f32> = HashMap::new();
        for tok in &tokens {
            *tf.entry(tok).or_default() += 1.0;
        }

        let total = tokens.len() as f32;
        let mut vec = vec![0.0f32; self.dimensions];

        for (term, count) in &tf {
            let freq = count / total;
            // Longer terms are more specific; weight them up slightly.
            let weight = 1.0 + (term.chars().count() as f32).ln();
            let bucket = Self::hash_term(term, self.dimensions);
            vec[bucket] += freq * weight;
        }

        // L2 normalize so dot products are cosine similarities.
        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }

        vec
    }
}

impl EmbeddingBackend for HashEmbedder {
    fn embed(&self, text: &str) -> MinwonResult<Vec<f32>> {
        Ok(self.feature_vector(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "fnv-hash"
    }

    fn is_available(&self) -> bool {
        true
    }
}
