//! # minwon-decision
//!
//! The judgment half of the routing engine: turns a ranked evidence list
//! plus the raw complaint text into one agency decision with a defensible
//! confidence value.
//!
//! ## Pipeline
//!
//! ```text
//! RoutingEngine (Classifier)
//! ├── hard_rules   retrieval bypass for unambiguous vocabulary
//! ├── hints        query hint over the ordered keyword table
//! ├── scoring      per-document evidence weights onto the scoreboard
//! ├── gate         institutional over-prediction cap
//! └── verdict      best agency, or the catch-all when evidence is diffuse
//! ```
//!
//! Evidence-absent and ambiguous-evidence cases are fallback
//! classifications, never errors; only retrieval backends failing outright
//! surface as `Err`.

pub mod engine;
pub mod gate;
pub mod hard_rules;
pub mod hints;
pub mod scoring;
pub mod verdict;

pub use engine::RoutingEngine;
