use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification confidence clamped to [0.0, 1.0].
///
/// Represents the winning agency's share of the total scoreboard mass.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Confidence(f64);

impl Confidence {
    /// Hard-rule classifications are certain by construction.
    pub const CERTAIN: Confidence = Confidence(1.0);
    /// No evidence at all.
    pub const ZERO: Confidence = Confidence(0.0);

    /// Clamp an arbitrary share into a valid confidence.
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Clamp and round to two decimals.
    ///
    /// Verdicts report two-decimal confidence so identical inputs always
    /// serialize to identical output.
    pub fn rounded(value: f64) -> Self {
        Self::new((value * 100.0).round() / 100.0)
    }

    /// The underlying share value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(0.0)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(Confidence::new(1.7).value(), 1.0);
        assert_eq!(Confidence::new(-0.3).value(), 0.0);
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(Confidence::rounded(0.4567).value(), 0.46);
        assert_eq!(Confidence::rounded(0.444).value(), 0.44);
    }

    #[test]
    fn displays_two_decimals() {
        assert_eq!(Confidence::new(0.5).to_string(), "0.50");
    }
}
