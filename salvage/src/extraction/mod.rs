//! Candidate scanning, validation, and repair for embedded JSON objects.
//!
//! The pipeline runs in three stages, each with its own submodule:
//!
//! - [`scan`] - locate candidate `{` ... `}` spans with a linear byte scan
//! - [`validate`] - strict object parsing of a candidate substring
//! - [`repair`] - extend an under-captured span to its true closing brace
//!
//! [`orchestrator`] wires the stages together and exposes the public
//! operations; [`error`] holds the internal failure taxonomy.

pub mod error;
pub mod orchestrator;
pub mod repair;
pub mod scan;
pub mod validate;

pub use error::CandidateError;
pub use orchestrator::{extract_all_json_objects, extract_first_json_object};
pub use repair::extend_span;
pub use scan::{minimal_spans, MinimalSpans, Span};
pub use validate::parse_object;
