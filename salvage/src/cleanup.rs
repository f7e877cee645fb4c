//! Configurable stripping of known model-reply wrapper artifacts.
//!
//! Model replies commonly wrap the requested JSON in a markdown code fence
//! with a `json` language tag. The recognized wrappers are enumerated
//! rules applied in a configured order, kept entirely outside the
//! extractor core: cleaning is a courtesy to the scanner, never a
//! prerequisite for it.

use serde::{Deserialize, Serialize};

/// One recognized wrapper-stripping rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CleanupRule {
    /// Remove a wrapping markdown code fence (triple-backtick markers),
    /// tolerating prose before and after the fenced block.
    CodeFence,
    /// Remove a leading `json` language tag (case-insensitive) of the kind
    /// fence removal leaves behind.
    LanguageTag,
}

/// Ordered application of [`CleanupRule`]s to a raw model reply.
///
/// # Examples
///
/// ```
/// use json_salvage::ResponseCleaner;
///
/// let reply = "```json\n{\"ok\": true}\n```";
/// assert_eq!(ResponseCleaner::default().clean(reply), "{\"ok\": true}");
/// ```
#[derive(Debug, Clone)]
pub struct ResponseCleaner {
    rules: Vec<CleanupRule>,
}

impl Default for ResponseCleaner {
    /// Strips fences first, then the language tag they leave behind.
    fn default() -> Self {
        Self {
            rules: vec![CleanupRule::CodeFence, CleanupRule::LanguageTag],
        }
    }
}

impl ResponseCleaner {
    /// Creates a cleaner with no rules; [`clean`](Self::clean) is then the
    /// identity apart from trimming.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule (fluent builder pattern). Rules run in insertion order.
    #[must_use]
    pub fn with_rule(mut self, rule: CleanupRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Applies every configured rule in order and returns the cleaned text.
    ///
    /// A rule that finds nothing to strip leaves the text untouched, so
    /// cleaning is total and safe to repeat.
    #[must_use]
    pub fn clean(&self, raw: &str) -> String {
        let mut text = raw.trim().to_string();
        for rule in &self.rules {
            text = match rule {
                CleanupRule::CodeFence => strip_code_fence(&text),
                CleanupRule::LanguageTag => strip_language_tag(&text),
            };
        }
        text
    }
}

fn strip_code_fence(text: &str) -> String {
    let Some(open) = text.find("```") else {
        return text.to_string();
    };
    let body = &text[open + 3..];
    match body.find("```") {
        Some(close) => body[..close].trim().to_string(),
        // Unterminated fence: keep the body, drop the marker.
        None => body.trim().to_string(),
    }
}

fn strip_language_tag(text: &str) -> String {
    let trimmed = text.trim_start();
    if trimmed.len() >= 4 && trimmed.as_bytes()[..4].eq_ignore_ascii_case(b"json") {
        let rest = &trimmed[4..];
        if rest.is_empty() || rest.starts_with(|c: char| c.is_whitespace() || c == '{') {
            return rest.trim_start().to_string();
        }
    }
    text.to_string()
}
