use crate::errors::MinwonResult;
use crate::models::Classification;

/// The single operation the routing core exposes to its callers.
pub trait Classifier: Send + Sync {
    /// Classify one complaint text into an agency decision.
    ///
    /// Always yields either a well-formed [`Classification`] (possibly the
    /// catch-all agency at low confidence) or an explicit error — callers
    /// can distinguish "we don't know" from "the system broke".
    fn classify(&self, query: &str) -> MinwonResult<Classification>;
}
