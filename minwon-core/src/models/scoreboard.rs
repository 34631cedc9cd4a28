use std::collections::HashMap;

/// Per-request accumulator of evidence weight per agency.
///
/// Built fresh for every classification; values only increase via [`add`]
/// or are explicitly lowered via [`cap`]. Ranked readout is deterministic:
/// score descending, agency name ascending on ties.
///
/// [`add`]: AgencyScoreboard::add
/// [`cap`]: AgencyScoreboard::cap
#[derive(Debug, Default, Clone)]
pub struct AgencyScoreboard {
    scores: HashMap<String, f64>,
}

impl AgencyScoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate weight onto an agency.
    pub fn add(&mut self, agency: &str, weight: f64) {
        *self.scores.entry(agency.to_string()).or_default() += weight;
    }

    /// Current score for an agency, 0.0 if it never scored.
    pub fn get(&self, agency: &str) -> f64 {
        self.scores.get(agency).copied().unwrap_or(0.0)
    }

    /// Lower an agency's score to `ceiling` if it accumulated above it.
    /// Never inserts, never raises.
    pub fn cap(&mut self, agency: &str, ceiling: f64) {
        if let Some(score) = self.scores.get_mut(agency) {
            if *score > ceiling {
                *score = ceiling;
            }
        }
    }

    /// Sum of all accumulated scores.
    pub fn total(&self) -> f64 {
        self.scores.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Agencies ranked by score descending, name ascending on ties.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self
            .scores
            .iter()
            .map(|(name, score)| (name.as_str(), *score))
            .collect();
        entries.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_weight() {
        let mut board = AgencyScoreboard::new();
        board.add("경찰청", 3.0);
        board.add("경찰청", 1.5);
        assert_eq!(board.get("경찰청"), 4.5);
    }

    #[test]
    fn get_defaults_to_zero() {
        let board = AgencyScoreboard::new();
        assert_eq!(board.get("없는기관"), 0.0);
    }

    #[test]
    fn cap_lowers_but_never_inserts() {
        let mut board = AgencyScoreboard::new();
        board.add("행정안전부", 2.4);
        board.cap("행정안전부", 0.8);
        assert_eq!(board.get("행정안전부"), 0.8);

        board.cap("경찰청", 0.8);
        assert_eq!(board.get("경찰청"), 0.0);
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn cap_leaves_lower_scores_alone() {
        let mut board = AgencyScoreboard::new();
        board.add("행정안전부", 0.5);
        board.cap("행정안전부", 0.8);
        assert_eq!(board.get("행정안전부"), 0.5);
    }

    #[test]
    fn ranked_orders_by_score_then_name() {
        let mut board = AgencyScoreboard::new();
        board.add("국토교통부", 2.0);
        board.add("경찰청", 3.0);
        board.add("소방청", 2.0);

        let ranked = board.ranked();
        assert_eq!(ranked[0].0, "경찰청");
        // Tied at 2.0: 국토교통부 sorts before 소방청 lexicographically.
        assert_eq!(ranked[1].0, "국토교통부");
        assert_eq!(ranked[2].0, "소방청");
    }

    #[test]
    fn total_sums_all_entries() {
        let mut board = AgencyScoreboard::new();
        board.add("경찰청", 3.0);
        board.add("소방청", 1.0);
        assert!((board.total() - 4.0).abs() < f64::EPSILON);
    }
}
