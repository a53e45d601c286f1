//! Export of rendered documents into downloadable artifacts.
//!
//! # Example
//!
//! ```
//! use infostep::export::{export, ExportFormat, ExportOptions};
//!
//! fn main() -> infostep::Result<()> {
//!     let doc = infostep::parse("Draft -> Review -> Publish")?;
//!     let artifact = export(&doc, &ExportOptions::new().with_format(ExportFormat::Svg))?;
//!     assert_eq!(artifact.file_name, "process-overview.svg");
//!     Ok(())
//! }
//! ```

mod raster;

pub use raster::{encode_jpeg, encode_png, rasterize, JPEG_QUALITY};

use crate::error::{Error, Result};
use crate::model::ParsedDocument;
use crate::render::{self, JsonFormat, RenderOptions};
use crate::style::Color;
use resvg::tiny_skia::Pixmap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Output format of an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Vector drawing of the selected layout
    #[default]
    Svg,

    /// Lossless raster of the drawing
    Png,

    /// Lossy raster of the drawing
    Jpeg,

    /// JSON structure
    Json,

    /// Markdown outline
    Markdown,

    /// Plain text outline
    Text,
}

impl ExportFormat {
    /// All formats in menu order.
    pub const ALL: [ExportFormat; 6] = [
        ExportFormat::Svg,
        ExportFormat::Png,
        ExportFormat::Jpeg,
        ExportFormat::Json,
        ExportFormat::Markdown,
        ExportFormat::Text,
    ];

    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
            ExportFormat::Text => "txt",
        }
    }

    /// MIME type of the artifact.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Svg => "image/svg+xml",
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg => "image/jpeg",
            ExportFormat::Json => "application/json",
            ExportFormat::Markdown => "text/markdown",
            ExportFormat::Text => "text/plain",
        }
    }

    /// Whether the artifact is a bitmap rendered from the drawing.
    pub fn is_raster(&self) -> bool {
        matches!(self, ExportFormat::Png | ExportFormat::Jpeg)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(ExportFormat::Svg),
            "png" => Ok(ExportFormat::Png),
            "jpg" | "jpeg" => Ok(ExportFormat::Jpeg),
            "json" => Ok(ExportFormat::Json),
            "md" | "markdown" => Ok(ExportFormat::Markdown),
            "txt" | "text" => Ok(ExportFormat::Text),
            other => Err(Error::Export(format!("unknown export format '{}'", other))),
        }
    }
}

/// Default scale of raster exports relative to the canvas size.
pub const DEFAULT_PIXEL_RATIO: f32 = 3.0;

/// Options for exporting a document.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Output format
    pub format: ExportFormat,

    /// Rendering options
    pub render: RenderOptions,

    /// Background used for this export instead of the style background
    pub background_override: Option<Color>,

    /// Device pixels per canvas pixel for PNG and JPEG output
    pub pixel_ratio: f32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            render: RenderOptions::default(),
            background_override: None,
            pixel_ratio: DEFAULT_PIXEL_RATIO,
        }
    }
}

impl ExportOptions {
    /// Create new export options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set output format.
    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Override the background color for this export.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background_override = Some(background);
        self
    }

    /// Set the raster scale factor.
    pub fn with_pixel_ratio(mut self, ratio: f32) -> Self {
        self.pixel_ratio = ratio;
        self
    }
}

/// An exported file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Format of the content
    pub format: ExportFormat,

    /// Suggested file name (slug of the title plus extension)
    pub file_name: String,

    /// Encoded content
    pub data: Vec<u8>,
}

impl Artifact {
    /// MIME type of the artifact.
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Get content length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the artifact has no content.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write the artifact to a file.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, &self.data)?;
        Ok(())
    }
}

/// Export a document in the requested format.
///
/// Rendering failures are reported as [`Error::Export`].
pub fn export(doc: &ParsedDocument, options: &ExportOptions) -> Result<Artifact> {
    let mut render_options = options.render.clone();
    if let Some(background) = options.background_override {
        render_options.style.background = background;
    }

    let data = encode(doc, options.format, &render_options, options.pixel_ratio).map_err(
        |e| match e {
            Error::Export(_) => e,
            other => Error::Export(other.to_string()),
        },
    )?;

    let file_name = format!("{}.{}", slugify(&doc.title), options.format.extension());
    log::debug!("Exported {} ({} bytes)", file_name, data.len());

    Ok(Artifact {
        format: options.format,
        file_name,
        data,
    })
}

fn encode(
    doc: &ParsedDocument,
    format: ExportFormat,
    options: &RenderOptions,
    pixel_ratio: f32,
) -> Result<Vec<u8>> {
    let raster = |doc: &ParsedDocument| -> Result<Pixmap> {
        let svg = render::to_svg(doc, options)?;
        rasterize(&svg, options.style.background, pixel_ratio)
    };

    match format {
        ExportFormat::Svg => Ok(render::to_svg(doc, options)?.into_bytes()),
        ExportFormat::Png => encode_png(&raster(doc)?),
        ExportFormat::Jpeg => encode_jpeg(&raster(doc)?),
        ExportFormat::Json => Ok(render::to_json(doc, JsonFormat::Pretty)?.into_bytes()),
        ExportFormat::Markdown => Ok(render::to_markdown(doc, options)?.into_bytes()),
        ExportFormat::Text => Ok(render::to_text(doc, options)?.into_bytes()),
    }
}

/// Lowercase ASCII slug for file names; falls back to "infographic".
fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "infographic".to_string()
    } else {
        slug.to_string()
    }
}
