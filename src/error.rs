//! Error types for infostep library.

use std::io;
use thiserror::Error;

/// Result type alias for infostep operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while parsing, rendering or exporting.
#[derive(Error, Debug)]
pub enum Error {
    /// The input is too short to describe any process.
    #[error("Please provide content to transform into an infographic.")]
    EmptyInput,

    /// The input survived normalization but produced no steps.
    #[error("No clear steps found. Use '1. Step' or 'Step 1 -> Step 2' format.")]
    NoStepsFound,

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input bytes are not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// A color literal or preset id could not be resolved.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// The layout identifier is not one of the known layouts.
    #[error("Unknown layout: {0}")]
    UnknownLayout(String),

    /// A corner, border or export token is not recognized.
    #[error("Invalid style option: {0}")]
    InvalidStyle(String),

    /// Error during rendering (SVG, Markdown, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// The rendered output could not be serialized into an artifact.
    #[error("Export failed: {0}")]
    Export(String),
}

impl Error {
    /// Whether this error came from the text parser.
    ///
    /// Parse errors mean the user should revise the input; every other
    /// kind is a tooling failure.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::EmptyInput | Error::NoStepsFound)
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}
