//! # infostep
//!
//! Turn free-form process descriptions into structured step infographics.
//!
//! The library recognizes the cues people type when describing a process
//! by hand (numbered lines, one step per line, or `A -> B -> C` flows)
//! and produces a [`ParsedDocument`] with a title, a subtitle and an
//! ordered list of steps. Renderers turn that document into SVG,
//! Markdown, plain text or JSON.
//!
//! ## Quick Start
//!
//! ```
//! use infostep::{parse, render, Layout, RenderOptions};
//!
//! fn main() -> infostep::Result<()> {
//!     let doc = parse("Onboarding\n1. Sign up: Create an account\n2. Verify: Confirm email")?;
//!     assert_eq!(doc.title, "Onboarding");
//!     assert_eq!(doc.steps.len(), 2);
//!
//!     let options = RenderOptions::new().with_layout(Layout::TimelineFlow);
//!     let svg = render::to_svg(&doc, &options)?;
//!     assert!(svg.starts_with("<svg"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Two parse modes**: arrow flows and line/numbered lists
//! - **Six layouts**: cards, horizontal steps, radial, timeline, ring, grid
//! - **Styling**: accent and background colors, corner and border styles
//! - **Export**: SVG, PNG, JPEG, Markdown, plain text, JSON

pub mod detect;
pub mod error;
pub mod export;
pub mod model;
pub mod parser;
pub mod render;
pub mod style;

// Re-export commonly used types
pub use detect::{detect_mode, ParseMode};
pub use error::{Error, Result};
pub use export::{export, Artifact, ExportFormat, ExportOptions};
pub use model::{ParsedDocument, Step, StepIcon};
pub use parser::{parse, parse_with_options, ParseOptions, Placeholders, StepParser};
pub use render::{JsonFormat, RenderOptions};
pub use style::{BorderVariant, Color, CornerStyle, Layout, StyleOptions};

use std::io::Read;
use std::path::Path;

/// Parse a process description stored in a file.
///
/// # Example
///
/// ```no_run
/// use infostep::parse_file;
///
/// let doc = parse_file("process.txt").unwrap();
/// println!("Steps: {}", doc.step_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ParsedDocument> {
    let bytes = std::fs::read(path)?;
    parse(&String::from_utf8(bytes)?)
}

/// Parse a process description from a reader.
///
/// # Example
///
/// ```no_run
/// use infostep::parse_reader;
///
/// let doc = parse_reader(std::io::stdin()).unwrap();
/// ```
pub fn parse_reader<R: Read>(mut reader: R) -> Result<ParsedDocument> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse(&String::from_utf8(bytes)?)
}

/// Convert a process description to Markdown.
///
/// # Example
///
/// ```
/// let markdown = infostep::to_markdown("Plan -> Build -> Ship").unwrap();
/// assert!(markdown.contains("1. **Plan**: Execution of Plan"));
/// ```
pub fn to_markdown(text: &str) -> Result<String> {
    let doc = parse(text)?;
    render::to_markdown(&doc, &RenderOptions::default())
}

/// Convert a process description to JSON.
pub fn to_json(text: &str, format: JsonFormat) -> Result<String> {
    let doc = parse(text)?;
    render::to_json(&doc, format)
}

/// Convert a process description to an SVG infographic.
///
/// # Example
///
/// ```
/// use infostep::{to_svg, Layout, RenderOptions};
///
/// let options = RenderOptions::new().with_layout(Layout::RadialProcess);
/// let svg = to_svg("Plan -> Build -> Ship", &options).unwrap();
/// assert!(svg.contains("</svg>"));
/// ```
pub fn to_svg(text: &str, options: &RenderOptions) -> Result<String> {
    let doc = parse(text)?;
    render::to_svg(&doc, options)
}

/// Builder for parsing and rendering process descriptions.
///
/// # Example
///
/// ```
/// use infostep::{Infostep, Layout, CornerStyle};
///
/// let svg = Infostep::new()
///     .with_layout(Layout::MultiColumn)
///     .with_corners(CornerStyle::Sharp)
///     .parse("1. Plan\n2. Build\n3. Ship")?
///     .to_svg()?;
/// # Ok::<(), infostep::Error>(())
/// ```
pub struct Infostep {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Infostep {
    /// Create a new Infostep builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Set parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Set render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Set the layout.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.render_options = self.render_options.with_layout(layout);
        self
    }

    /// Set the full style.
    pub fn with_style(mut self, style: StyleOptions) -> Self {
        self.render_options = self.render_options.with_style(style);
        self
    }

    /// Set the accent color.
    pub fn with_accent(mut self, accent: Color) -> Self {
        self.render_options.style = self.render_options.style.with_accent(accent);
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.render_options.style = self.render_options.style.with_background(background);
        self
    }

    /// Set the corner style.
    pub fn with_corners(mut self, corner: CornerStyle) -> Self {
        self.render_options.style = self.render_options.style.with_corner(corner);
        self
    }

    /// Set the border variant.
    pub fn with_border(mut self, border: BorderVariant) -> Self {
        self.render_options.style = self.render_options.style.with_border(border);
        self
    }

    /// Enable frontmatter in Markdown output.
    pub fn with_frontmatter(mut self) -> Self {
        self.render_options = self.render_options.with_frontmatter(true);
        self
    }

    /// Parse text and return a result wrapper.
    pub fn parse(self, text: &str) -> Result<InfostepResult> {
        let document = StepParser::with_options(self.parse_options).parse(text)?;
        Ok(InfostepResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse a file and return a result wrapper.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<InfostepResult> {
        let bytes = std::fs::read(path)?;
        self.parse(&String::from_utf8(bytes)?)
    }
}

impl Default for Infostep {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a process description.
pub struct InfostepResult {
    /// The parsed document
    pub document: ParsedDocument,
    /// Render options to use
    render_options: RenderOptions,
}

impl InfostepResult {
    /// Convert to an SVG drawing.
    pub fn to_svg(&self) -> Result<String> {
        render::to_svg(&self.document, &self.render_options)
    }

    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.document, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Export with the builder's render options.
    pub fn export(&self, format: ExportFormat) -> Result<Artifact> {
        let options = ExportOptions::new()
            .with_format(format)
            .with_render_options(self.render_options.clone());
        export::export(&self.document, &options)
    }

    /// Get the document.
    pub fn document(&self) -> &ParsedDocument {
        &self.document
    }

    /// Get the render options.
    pub fn render_options(&self) -> &RenderOptions {
        &self.render_options
    }
}
