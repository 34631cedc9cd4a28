//! Data model for one classification request.
//!
//! All per-request values are immutable once constructed; nothing here is
//! persisted or shared across requests.

pub mod classification;
pub mod confidence;
pub mod document;
pub mod scoreboard;

pub use classification::Classification;
pub use confidence::Confidence;
pub use document::{FusedDocument, RetrievalKind, RetrievedDocument};
pub use scoreboard::AgencyScoreboard;
