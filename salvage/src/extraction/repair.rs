//! Nesting-depth extension of under-captured candidate spans.

use tracing::trace;

use super::error::CandidateError;
use super::scan::Span;

/// Extends a failed minimal span to its true outer closing brace.
///
/// Re-scans the full text from the span's opening brace, tracking a signed
/// nesting depth (+1 on `{`, -1 on `}`). The extended span ends one past
/// the byte where the depth first returns to zero. The scan is iterative,
/// so nesting depth never translates into call-stack depth.
///
/// A span that already ends at its own balance point is returned unchanged;
/// the caller's revalidation then fails for the same reason it did before
/// and the candidate is dropped.
///
/// # Errors
///
/// Returns [`CandidateError::NoExtensionPoint`] when the depth never
/// returns to zero before the end of the text. Callers recover by falling
/// back to the unextended span.
pub fn extend_span(text: &str, span: Span) -> Result<Span, CandidateError> {
    let mut depth: i64 = 0;
    for (offset, byte) in text.bytes().enumerate().skip(span.start) {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    let extended = Span {
                        start: span.start,
                        end: offset + 1,
                    };
                    trace!(start = span.start, end = extended.end, "span extended");
                    return Ok(extended);
                }
            }
            _ => {}
        }
    }
    Err(CandidateError::NoExtensionPoint { start: span.start })
}
