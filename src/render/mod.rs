//! Rendering module for converting parsed documents to output formats.

mod glyph;
mod json;
mod layout;
mod markdown;
mod options;
mod svg;
mod text;

pub use glyph::{svg_path, text_glyph};
pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, MarkdownRenderer};
pub use options::{RenderOptions, DEFAULT_CANVAS_WIDTH, MIN_CANVAS_WIDTH};
pub use svg::{to_svg, SvgRenderer};
pub use text::to_text;
