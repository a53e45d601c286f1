//! SVG rendering for parsed documents.
//!
//! The renderer draws one self-contained SVG per layout. It never
//! validates content: steps with empty titles or descriptions are drawn
//! as-is.

use crate::error::Result;
use crate::model::{ParsedDocument, StepIcon};
use crate::style::{BorderVariant, Color, Layout, StyleOptions, BRAND};

use super::glyph::svg_path;
use super::layout;
use super::RenderOptions;

const FONT_FAMILY: &str = "Inter, Helvetica, Arial, sans-serif";

/// Outer padding around the drawing.
pub(super) const MARGIN: f64 = 60.0;

/// Convert a document to an SVG drawing.
pub fn to_svg(doc: &ParsedDocument, options: &RenderOptions) -> Result<String> {
    let renderer = SvgRenderer::new(options.clone());
    renderer.render(doc)
}

/// SVG renderer.
pub struct SvgRenderer {
    options: RenderOptions,
}

impl SvgRenderer {
    /// Create a new SVG renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to SVG markup.
    pub fn render(&self, doc: &ParsedDocument) -> Result<String> {
        let theme = Theme::from_style(&self.options.style);
        let mut canvas = Canvas::new(f64::from(self.options.canvas_width), theme);

        let top = canvas.header(doc);
        let height = match self.options.layout {
            Layout::VerticalCards => layout::vertical_cards(&mut canvas, doc, top),
            Layout::HorizontalSteps => layout::horizontal_steps(&mut canvas, doc, top),
            Layout::RadialProcess => layout::radial_process(&mut canvas, doc, top),
            Layout::TimelineFlow => layout::timeline_flow(&mut canvas, doc, top),
            Layout::CircularProgress => layout::circular_progress(&mut canvas, doc, top),
            Layout::MultiColumn => layout::multi_column(&mut canvas, doc, top),
        };

        log::debug!(
            "Rendered {} steps as {} ({}x{})",
            doc.steps.len(),
            self.options.layout,
            self.options.canvas_width,
            height.ceil()
        );

        Ok(canvas.finish(&doc.title, height))
    }
}

/// Colors and shapes derived from [`StyleOptions`].
#[derive(Debug, Clone, Copy)]
pub(super) struct Theme {
    pub accent: Color,
    pub on_accent: Color,
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub card_fill: Color,
    pub radius: f64,
    pub border: BorderVariant,
}

impl Theme {
    fn from_style(style: &StyleOptions) -> Self {
        let on_accent = if style.accent.is_dark() {
            Color::rgb(0xFF, 0xFF, 0xFF)
        } else {
            BRAND.text
        };
        Self {
            accent: style.accent,
            on_accent,
            background: style.background,
            text: style.text_color(),
            muted: style.muted_color(),
            card_fill: style.background.mix(style.accent, 0.08),
            radius: f64::from(style.corner.radius()),
            border: style.border,
        }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Font settings for a block of text.
#[derive(Debug, Clone, Copy)]
pub(super) struct TextStyle {
    pub size: f64,
    pub bold: bool,
    pub fill: Color,
    pub anchor: Anchor,
}

impl TextStyle {
    pub fn line_height(&self) -> f64 {
        (self.size * 1.35).round()
    }

    /// Rough number of characters that fit in `width` pixels.
    pub fn chars_for(&self, width: f64) -> usize {
        let per_char = self.size * if self.bold { 0.6 } else { 0.52 };
        ((width / per_char).floor() as usize).max(4)
    }

    /// Height taken by `lines` lines of this style.
    pub fn block_height(&self, lines: usize) -> f64 {
        lines as f64 * self.line_height()
    }
}

/// Accumulates SVG elements for one drawing.
pub(super) struct Canvas {
    pub width: f64,
    pub theme: Theme,
    body: String,
}

impl Canvas {
    fn new(width: f64, theme: Theme) -> Self {
        Self {
            width,
            theme,
            body: String::new(),
        }
    }

    pub fn title_style(&self, size: f64, anchor: Anchor) -> TextStyle {
        TextStyle {
            size,
            bold: true,
            fill: self.theme.text,
            anchor,
        }
    }

    pub fn body_style(&self, size: f64, anchor: Anchor) -> TextStyle {
        TextStyle {
            size,
            bold: false,
            fill: self.theme.muted,
            anchor,
        }
    }

    /// Draw the document title and subtitle; returns the y where content starts.
    fn header(&mut self, doc: &ParsedDocument) -> f64 {
        let center = self.width / 2.0;
        let title_style = self.title_style(40.0, Anchor::Middle);
        let title_lines = wrap_text(&doc.title, title_style.chars_for(self.width - 2.0 * MARGIN));
        let mut y = MARGIN + title_style.size;
        self.text(center, y, &title_lines, title_style);
        y += title_style.block_height(title_lines.len().saturating_sub(1));

        if let Some(ref subtitle) = doc.subtitle {
            let style = self.body_style(18.0, Anchor::Middle);
            let lines = wrap_text(subtitle, style.chars_for(self.width - 2.0 * MARGIN));
            y += 36.0;
            self.text(center, y, &lines, style);
            y += style.block_height(lines.len().saturating_sub(1));
        }

        y + 50.0
    }

    /// Step card with the themed fill, corners and border.
    pub fn card(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let stroke = match self.theme.border {
            BorderVariant::Solid => format!(r#" stroke="{}" stroke-width="2""#, self.theme.accent),
            BorderVariant::Dashed => format!(
                r#" stroke="{}" stroke-width="2" stroke-dasharray="8 6""#,
                self.theme.accent
            ),
            BorderVariant::None => r#" stroke="none""#.to_string(),
        };
        let radius = self.theme.radius.min(h / 2.0).min(w / 2.0);
        self.body.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}"{}/>"#,
            num(x),
            num(y),
            num(w),
            num(h),
            num(radius),
            self.theme.card_fill,
            stroke
        ));
        self.body.push('\n');
    }

    /// Numbered circle in the accent color.
    pub fn badge(&mut self, cx: f64, cy: f64, r: f64, number: u32) {
        self.circle(cx, cy, r, self.theme.accent);
        let style = TextStyle {
            size: (r * 0.85).round(),
            bold: true,
            fill: self.theme.on_accent,
            anchor: Anchor::Middle,
        };
        let baseline = cy + style.size * 0.35;
        self.text(cx, baseline, &[number.to_string()], style);
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: Color) {
        self.body.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            num(cx),
            num(cy),
            num(r),
            fill
        ));
        self.body.push('\n');
    }

    pub fn ring(&mut self, cx: f64, cy: f64, r: f64, stroke: Color, width: f64, opacity: f64) {
        self.body.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="none" stroke="{}" stroke-width="{}" stroke-opacity="{}"/>"#,
            num(cx),
            num(cy),
            num(r),
            stroke,
            num(width),
            num(opacity)
        ));
        self.body.push('\n');
    }

    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, opacity: f64) {
        self.body.push_str(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-opacity="{}" stroke-linecap="round"/>"#,
            num(from.0),
            num(from.1),
            num(to.0),
            num(to.1),
            self.theme.accent,
            num(width),
            num(opacity)
        ));
        self.body.push('\n');
    }

    /// Circular arc from `start` to `end` radians, clockwise.
    pub fn arc(&mut self, center: (f64, f64), r: f64, start: f64, end: f64, width: f64, opacity: f64) {
        let (x1, y1) = polar(center, r, start);
        let (x2, y2) = polar(center, r, end);
        let large = if end - start > std::f64::consts::PI { 1 } else { 0 };
        self.body.push_str(&format!(
            r#"<path d="M {} {} A {} {} 0 {} 1 {} {}" fill="none" stroke="{}" stroke-width="{}" stroke-opacity="{}" stroke-linecap="round"/>"#,
            num(x1),
            num(y1),
            num(r),
            num(r),
            large,
            num(x2),
            num(y2),
            self.theme.accent,
            num(width),
            num(opacity)
        ));
        self.body.push('\n');
    }

    /// Glyph for a step's icon hint.
    pub fn icon(&mut self, cx: f64, cy: f64, icon: StepIcon) {
        self.body.push_str(&format!(
            r#"<path d="{}" transform="translate({} {})" fill="none" stroke="{}" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round"/>"#,
            svg_path(icon),
            num(cx),
            num(cy),
            self.theme.accent
        ));
        self.body.push('\n');
    }

    /// Multi-line text; the first baseline sits at `y`.
    pub fn text(&mut self, x: f64, y: f64, lines: &[String], style: TextStyle) {
        if lines.is_empty() {
            return;
        }
        self.body.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{}" font-weight="{}" fill="{}" text-anchor="{}">"#,
            num(x),
            num(y),
            num(style.size),
            if style.bold { 700 } else { 400 },
            style.fill,
            style.anchor.as_str()
        ));
        for (i, line) in lines.iter().enumerate() {
            let dy = if i == 0 { 0.0 } else { style.line_height() };
            self.body.push_str(&format!(
                r#"<tspan x="{}" dy="{}">{}</tspan>"#,
                num(x),
                num(dy),
                escape_xml(line)
            ));
        }
        self.body.push_str("</text>\n");
    }

    fn finish(self, title: &str, height: f64) -> String {
        let height = height.ceil();
        let mut svg = String::with_capacity(self.body.len() + 512);
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{font}">"#,
            w = num(self.width),
            h = num(height),
            font = FONT_FAMILY
        ));
        svg.push('\n');
        svg.push_str(&format!("<title>{}</title>\n", escape_xml(title)));
        svg.push_str(&format!(
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            self.theme.background
        ));
        svg.push('\n');
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }
}

/// Point at `angle` radians on a circle.
pub(super) fn polar(center: (f64, f64), r: f64, angle: f64) -> (f64, f64) {
    (center.0 + r * angle.cos(), center.1 + r * angle.sin())
}

/// Format a coordinate with at most one decimal.
fn num(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{:.1}", rounded)
    }
}

/// Escape text for XML content and attributes.
pub(super) fn escape_xml(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            _ => result.push(c),
        }
    }
    result
}

/// Greedy word wrap at `max_chars` characters per line.
///
/// Words longer than a line are split. Empty text gives no lines.
pub(super) fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        for chunk in chars.chunks(max_chars) {
            let chunk_len = chunk.len();
            if current_len > 0 && current_len + 1 + chunk_len > max_chars {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.extend(chunk);
            current_len += chunk_len;
        }
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Step;
    use crate::style::CornerStyle;

    fn sample() -> ParsedDocument {
        ParsedDocument::new(
            "Ship <fast> & safe",
            Some("Generated from manual input".to_string()),
            vec![
                Step::new(0, "Plan", "Define scope", StepIcon::Checkmark),
                Step::new(1, "Build", "Ship code", StepIcon::Checkmark),
            ],
        )
    }

    #[test]
    fn test_svg_document_shell() {
        let svg = to_svg(&sample(), &RenderOptions::default()).unwrap();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"1200\""));
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.contains("<title>Ship &lt;fast&gt; &amp; safe</title>"));
        assert!(svg.contains("<rect width=\"100%\" height=\"100%\" fill=\"#EEEDE9\"/>"));
    }

    #[test]
    fn test_border_variants() {
        let dashed = RenderOptions::new()
            .with_style(StyleOptions::new().with_border(BorderVariant::Dashed));
        let svg = to_svg(&sample(), &dashed).unwrap();
        assert!(svg.contains("stroke-dasharray=\"8 6\""));

        let none = RenderOptions::new()
            .with_style(StyleOptions::new().with_border(BorderVariant::None));
        let svg = to_svg(&sample(), &none).unwrap();
        assert!(!svg.contains("stroke-dasharray"));
        assert!(svg.contains("stroke=\"none\""));
    }

    #[test]
    fn test_corner_radius() {
        let sharp = RenderOptions::new()
            .with_style(StyleOptions::new().with_corner(CornerStyle::Sharp));
        let svg = to_svg(&sample(), &sharp).unwrap();
        assert!(svg.contains("rx=\"0\""));

        let svg = to_svg(&sample(), &RenderOptions::default()).unwrap();
        assert!(svg.contains("rx=\"12\""));
    }

    #[test]
    fn test_wrap_text() {
        assert!(wrap_text("", 10).is_empty());
        assert_eq!(wrap_text("one two three", 7), ["one two", "three"]);
        assert_eq!(wrap_text("abcdefghij", 4), ["abcd", "efgh", "ij"]);
        assert_eq!(wrap_text("  spaced   out ", 20), ["spaced out"]);
    }

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(12.0), "12");
        assert_eq!(num(12.25), "12.3");
        assert_eq!(num(-0.04), "0");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&apos;");
    }
}
