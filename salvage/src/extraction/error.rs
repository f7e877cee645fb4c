//! Failure taxonomy for candidate evaluation.
//!
//! Every variant here is recovered inside the orchestrator; none escapes
//! the public operations. Finding no candidate at all is the `None` result
//! of [`extract_first_json_object`](super::extract_first_json_object), not
//! an error.

use thiserror::Error;

use super::scan::Span;

/// Errors raised while evaluating a single candidate span.
#[derive(Debug, Error)]
pub enum CandidateError {
    /// The candidate substring is not one well-formed JSON object.
    #[error("candidate at bytes {}..{} is not a JSON object: {message}", .span.start, .span.end)]
    MalformedJson {
        /// Parser diagnostic for the failed candidate.
        message: String,
        /// The span that failed validation.
        span: Span,
    },

    /// Brace nesting opened at the span start never returned to zero.
    #[error("no extension point: nesting opened at byte {start} never closes")]
    NoExtensionPoint {
        /// Byte offset of the opening brace where depth counting began.
        start: usize,
    },
}
