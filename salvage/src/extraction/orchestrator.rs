//! Orchestration of the scan / validate / repair pipeline.

use serde_json::{Map, Value};
use tracing::debug;

use super::repair::extend_span;
use super::scan::{minimal_spans, Span};
use super::validate::parse_object;

/// Returns the first JSON object recovered from `text`, if any.
///
/// Candidates are considered in left-to-right order of their minimal
/// spans; the first one that parses, directly or after a single nesting
/// extension, wins. A later candidate is never preferred, however much
/// larger or cleaner it may be. Malformed candidates are dropped silently,
/// so this never panics or errors on any input.
///
/// # Examples
///
/// ```
/// use json_salvage::extract_first_json_object;
///
/// let reply = r#"Sure! Here you go: {"ok": true} - hope that helps."#;
/// let object = extract_first_json_object(reply).unwrap();
/// assert_eq!(object["ok"], true);
///
/// assert!(extract_first_json_object("no json here").is_none());
/// ```
#[must_use]
pub fn extract_first_json_object(text: &str) -> Option<Map<String, Value>> {
    minimal_spans(text).find_map(|span| evaluate_candidate(text, span))
}

/// Returns every JSON object recovered from `text`, in discovery order.
///
/// Same per-candidate policy as [`extract_first_json_object`]; this simply
/// keeps collecting instead of stopping at the first survivor.
#[must_use]
pub fn extract_all_json_objects(text: &str) -> Vec<Map<String, Value>> {
    minimal_spans(text)
        .filter_map(|span| evaluate_candidate(text, span))
        .collect()
}

/// Runs one candidate through its validate / extend / revalidate states.
///
/// `None` means the candidate is discarded. Discards are logged at debug
/// level and never surfaced; there is no second extension attempt.
fn evaluate_candidate(text: &str, span: Span) -> Option<Map<String, Value>> {
    match parse_object(span.slice(text), span) {
        Ok(object) => return Some(object),
        Err(err) => debug!(%err, "minimal span rejected, attempting extension"),
    }

    // An unclosed nesting falls back to the unextended span, which then
    // fails revalidation for the same reason and drops the candidate.
    let extended = extend_span(text, span).unwrap_or_else(|err| {
        debug!(%err, "keeping unextended span");
        span
    });

    match parse_object(extended.slice(text), extended) {
        Ok(object) => Some(object),
        Err(err) => {
            debug!(%err, "candidate discarded");
            None
        }
    }
}
