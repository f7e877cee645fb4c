//! Minimal-span matching of brace-delimited candidates.
//!
//! The scan is a plain linear pass over bytes rather than a regex: the
//! "shallowest non-nested match" semantics are explicit here instead of
//! being implied by pattern syntax. Candidate offsets always land on ASCII
//! brace bytes, which never occur inside multi-byte UTF-8 sequences, so
//! slicing the scanned text at a span is always valid.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Half-open byte range of one candidate substring within the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Byte offset of the opening `{`.
    pub start: usize,
    /// Byte offset one past the closing `}`.
    pub end: usize,
}

impl Span {
    /// Returns the candidate substring this span covers.
    #[must_use]
    pub fn slice(self, text: &str) -> &str {
        &text[self.start..self.end]
    }

    /// Length of the span in bytes.
    #[must_use]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no bytes.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

/// Lazy iterator over non-overlapping minimal candidate spans.
///
/// A span opens at the next unconsumed `{` and closes at the first `}`
/// that follows it. Interior `{` bytes do not restart the match, so the
/// naive span for a nested object mis-closes at its first inner `}`; the
/// repair stage recomputes the true end when that happens. Each match
/// consumes input through its own closing brace before the next search
/// resumes. A trailing `{` with no `}` after it yields nothing.
#[derive(Debug, Clone)]
pub struct MinimalSpans<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Iterator for MinimalSpans<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.bytes.get(self.pos..)?;
        let open = rest.iter().position(|&b| b == b'{')?;
        let start = self.pos + open;
        let close = self.bytes.get(start + 1..)?.iter().position(|&b| b == b'}')?;
        let end = start + 1 + close + 1;
        self.pos = end;
        trace!(start, end, "minimal span located");
        Some(Span { start, end })
    }
}

/// Scans `text` left to right for minimal brace-pair candidate spans.
///
/// The scan locates substrings only; it performs no JSON validation.
#[must_use]
pub const fn minimal_spans(text: &str) -> MinimalSpans<'_> {
    MinimalSpans {
        bytes: text.as_bytes(),
        pos: 0,
    }
}
