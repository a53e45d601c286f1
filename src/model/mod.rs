//! Document model types for parsed process descriptions.
//!
//! This module defines the structure that bridges text parsing and
//! rendering. A [`ParsedDocument`] is built once per parse and never
//! mutated afterwards; renderers only read it.

mod document;
mod step;

pub use document::ParsedDocument;
pub use step::{Step, StepIcon};
