//! Recovery parser for JSON objects embedded in messy model output.
//!
//! Generative-model replies rarely arrive as clean JSON: the object the
//! caller asked for tends to be wrapped in markdown fences, surrounded by
//! prose, or cut short mid-structure. This crate digs the first valid JSON
//! object out of such a blob:
//!
//! - [`extraction`] - the core scan / validate / repair pipeline
//! - [`cleanup`] - configurable stripping of known reply wrappers
//!
//! The top-level entry point is [`extract_first_json_object`]; it is total
//! and panic-free, reducing every malformed candidate to "try the next one"
//! and every empty scan to `None`.

/// Stripping rules for known model-reply wrapper artifacts.
pub mod cleanup;
/// Candidate scanning, strict validation, and brace-nesting repair.
pub mod extraction;

pub use cleanup::{CleanupRule, ResponseCleaner};
pub use extraction::{extract_all_json_objects, extract_first_json_object};

/// Common traits and types for ergonomic usage of the extractor.
pub mod prelude {
    pub use crate::cleanup::{CleanupRule, ResponseCleaner};
    pub use crate::extraction::{
        extract_all_json_objects, extract_first_json_object, CandidateError, Span,
    };
}
