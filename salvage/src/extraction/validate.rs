//! Strict JSON object validation of candidate substrings.

use serde_json::{Map, Value};

use super::error::CandidateError;
use super::scan::Span;

/// Parses a candidate substring as exactly one JSON object.
///
/// Succeeds only for a single well-formed object with no trailing bytes.
/// Arrays, scalars, truncated structures, and anything with garbage after
/// the closing brace all fail.
///
/// # Errors
///
/// Returns [`CandidateError::MalformedJson`] carrying the parser
/// diagnostic and the offending span.
pub fn parse_object(candidate: &str, span: Span) -> Result<Map<String, Value>, CandidateError> {
    serde_json::from_str(candidate).map_err(|source| CandidateError::MalformedJson {
        message: source.to_string(),
        span,
    })
}
