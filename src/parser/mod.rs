//! Text-to-structure parsing module.

mod options;
mod step_parser;

pub use options::{ParseOptions, Placeholders};
pub use step_parser::{parse, parse_with_options, StepParser};
