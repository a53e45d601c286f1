//! Rendering options and configuration.

use crate::style::{Layout, StyleOptions};

/// Default drawing width in pixels.
pub const DEFAULT_CANVAS_WIDTH: u32 = 1200;

/// Narrowest drawing the SVG renderer will lay out.
pub const MIN_CANVAS_WIDTH: u32 = 480;

/// Options for rendering a parsed document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Layout used for SVG output
    pub layout: Layout,

    /// Colors, corners and borders
    pub style: StyleOptions,

    /// Include YAML frontmatter in Markdown output
    pub include_frontmatter: bool,

    /// Escape special Markdown characters in titles and descriptions
    pub escape_special_chars: bool,

    /// SVG canvas width in pixels
    pub canvas_width: u32,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the style.
    pub fn with_style(mut self, style: StyleOptions) -> Self {
        self.style = style;
        self
    }

    /// Enable or disable frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Enable or disable Markdown escaping.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_special_chars = escape;
        self
    }

    /// Set the canvas width, clamped to a sensible minimum.
    pub fn with_canvas_width(mut self, width: u32) -> Self {
        self.canvas_width = width.max(MIN_CANVAS_WIDTH);
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            style: StyleOptions::default(),
            include_frontmatter: false,
            escape_special_chars: true,
            canvas_width: DEFAULT_CANVAS_WIDTH,
        }
    }
}
