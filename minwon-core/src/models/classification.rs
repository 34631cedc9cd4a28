use serde::{Deserialize, Serialize};

use super::Confidence;
use crate::errors::MinwonResult;

/// Terminal output of one classification request. Never mutated after
/// construction.
///
/// Field names are the wire contract consumed by the complaint backend;
/// do not rename without coordinating a backend change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    /// Numeric agency code from the policy code table.
    pub agency_code: i64,
    /// Agency display name, or the fallback name when unclassified.
    pub agency_name: String,
    /// UI category derived from the agency code.
    pub category: String,
    /// Winning agency's share of the scoreboard, two decimals.
    pub confidence: Confidence,
    /// Human-readable justification for the decision.
    pub reasoning: String,
    /// Evidence source detail strings in retrieval order.
    pub sources: Vec<String>,
}

impl Classification {
    /// Serialize to the JSON wire shape.
    pub fn to_json(&self) -> MinwonResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_field_names_are_stable() {
        let c = Classification {
            agency_code: 18,
            agency_name: "경찰청".to_string(),
            category: "경찰·검찰".to_string(),
            confidence: Confidence::CERTAIN,
            reasoning: "테스트".to_string(),
            sources: vec!["도로교통법.pdf (VECTOR: 0.9000)".to_string()],
        };

        let json = c.to_json().unwrap();
        for field in [
            "agency_code",
            "agency_name",
            "category",
            "confidence",
            "reasoning",
            "sources",
        ] {
            assert!(json.contains(field), "missing wire field {field}");
        }
    }

    #[test]
    fn confidence_serializes_as_bare_number() {
        let c = Classification {
            agency_code: 38,
            agency_name: "기타".to_string(),
            category: "기타".to_string(),
            confidence: Confidence::ZERO,
            reasoning: "근거 없음".to_string(),
            sources: Vec::new(),
        };
        let json = c.to_json().unwrap();
        assert!(json.contains("\"confidence\":0.0"));
    }
}
