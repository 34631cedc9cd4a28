//! Raw vector-store score normalization.
//!
//! Vector stores report either cosine similarity (≤ 1.0, higher is
//! better) or cosine distance (can exceed 1.0, lower is better) depending
//! on collection configuration. Downstream weighting assumes "higher is
//! better, never negative", so raw values are normalized exactly once,
//! here.

/// Normalize a raw backend score to similarity semantics.
///
/// Raw values above 1.0 are cosine distances and become `1 - raw`;
/// everything else passes through. The result is clamped to ≥ 0.
pub fn normalize_cosine_score(raw: f64) -> f64 {
    let score = if raw > 1.0 { 1.0 - raw } else { raw };
    score.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn similarity_passes_through() {
        assert_eq!(normalize_cosine_score(0.82), 0.82);
        assert_eq!(normalize_cosine_score(1.0), 1.0);
        assert_eq!(normalize_cosine_score(0.0), 0.0);
    }

    #[test]
    fn distance_above_one_is_flipped_and_clamped() {
        // 1 - 1.3 = -0.3, clamped to zero.
        assert_eq!(normalize_cosine_score(1.3), 0.0);
        assert_eq!(normalize_cosine_score(2.0), 0.0);
    }

    #[test]
    fn negative_raw_clamps_to_zero() {
        assert_eq!(normalize_cosine_score(-0.4), 0.0);
    }

    #[test]
    fn never_negative() {
        for raw in [-5.0, -0.01, 0.5, 0.999, 1.0001, 10.0] {
            assert!(normalize_cosine_score(raw) >= 0.0, "raw {raw}");
        }
    }
}
