//! Layout and style configuration consumed by the renderers.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// One of the fixed infographic layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// Stacked full-width cards
    #[default]
    VerticalCards,
    /// Left-to-right row of numbered steps
    HorizontalSteps,
    /// Steps orbiting a central title
    RadialProcess,
    /// Alternating steps along a vertical spine
    TimelineFlow,
    /// Steps placed on a progress ring
    CircularProgress,
    /// Grid of step cards
    MultiColumn,
}

impl Layout {
    /// All layouts in menu order.
    pub const ALL: [Layout; 6] = [
        Layout::VerticalCards,
        Layout::HorizontalSteps,
        Layout::RadialProcess,
        Layout::TimelineFlow,
        Layout::CircularProgress,
        Layout::MultiColumn,
    ];

    /// Stable identifier (e.g. "vertical-cards").
    pub fn id(&self) -> &'static str {
        match self {
            Layout::VerticalCards => "vertical-cards",
            Layout::HorizontalSteps => "horizontal-steps",
            Layout::RadialProcess => "radial-process",
            Layout::TimelineFlow => "timeline-flow",
            Layout::CircularProgress => "circular-progress",
            Layout::MultiColumn => "multi-column",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Layout::VerticalCards => "Transformative Flow",
            Layout::HorizontalSteps => "Clarity Roadmap",
            Layout::RadialProcess => "Central Integrity",
            Layout::TimelineFlow => "Legacy Path",
            Layout::CircularProgress => "Eternal Orbit",
            Layout::MultiColumn => "Information Matrix",
        }
    }

    /// Short description shown next to the label.
    pub fn description(&self) -> &'static str {
        match self {
            Layout::VerticalCards => "Deep narrative evolution",
            Layout::HorizontalSteps => "Linear structural progression",
            Layout::RadialProcess => "Unified core mission",
            Layout::TimelineFlow => "Empowered historical journey",
            Layout::CircularProgress => "Sustainable human-centered loop",
            Layout::MultiColumn => "Complex data empowered",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Layout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Layout::ALL
            .into_iter()
            .find(|layout| layout.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownLayout(s.to_string()))
    }
}

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` or `#RGB` literal.
    pub fn from_hex(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let expand = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                Ok(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => Err(invalid()),
        }
    }

    /// Resolve a hex literal or a preset id from [`ACCENT_COLORS`] or
    /// [`BACKGROUND_COLORS`].
    pub fn resolve(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::from_hex(s);
        }
        ACCENT_COLORS
            .iter()
            .chain(BACKGROUND_COLORS.iter())
            .find(|preset| preset.id.eq_ignore_ascii_case(s))
            .map(|preset| preset.color())
            .ok_or_else(|| Error::InvalidColor(s.to_string()))
    }

    /// Relative luminance in `0.0..=1.0`.
    pub fn luminance(&self) -> f64 {
        let linear = |c: u8| {
            let c = f64::from(c) / 255.0;
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }

    /// Whether light text reads better on this color.
    pub fn is_dark(&self) -> bool {
        self.luminance() < 0.18
    }

    /// Blend toward `other` by `t` (0.0 keeps `self`, 1.0 gives `other`).
    pub fn mix(&self, other: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let blend = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Color::rgb(
            blend(self.r, other.r),
            blend(self.g, other.g),
            blend(self.b, other.b),
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}

/// A selectable color preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    /// Token accepted by [`Color::resolve`]
    pub id: &'static str,

    /// Display name
    pub label: &'static str,

    /// Preset value
    pub color: Color,
}

impl NamedColor {
    const fn new(id: &'static str, label: &'static str, color: Color) -> Self {
        Self { id, label, color }
    }

    /// The preset color.
    pub fn color(&self) -> Color {
        self.color
    }
}

/// House palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandPalette {
    /// Headline and badge blue
    pub primary: Color,

    /// Default accent
    pub accent: Color,

    /// Default canvas background
    pub background: Color,

    /// Body text on light backgrounds
    pub text: Color,

    /// Secondary text on light backgrounds
    pub muted: Color,
}

/// The house palette.
pub const BRAND: BrandPalette = BrandPalette {
    primary: Color::rgb(0x03, 0x4F, 0x80),
    accent: Color::rgb(0x8F, 0x91, 0x85),
    background: Color::rgb(0xEE, 0xED, 0xE9),
    text: Color::rgb(0x1A, 0x26, 0x33),
    muted: Color::rgb(0x81, 0x81, 0x81),
};

/// Accent presets, in display order.
pub const ACCENT_COLORS: [NamedColor; 5] = [
    NamedColor::new("ocean", "Ocean Blue", Color::rgb(0x03, 0x4F, 0x80)),
    NamedColor::new("earth", "Earthy Green", Color::rgb(0x8F, 0x91, 0x85)),
    NamedColor::new("navy", "Midnight Navy", Color::rgb(0x1A, 0x26, 0x33)),
    NamedColor::new("blue-grey", "Blue Grey", Color::rgb(0x2E, 0x3B, 0x4A)),
    NamedColor::new("taupe", "Gentle Taupe", Color::rgb(0xE4, 0xDF, 0xD9)),
];

/// Background presets, in display order.
pub const BACKGROUND_COLORS: [NamedColor; 5] = [
    NamedColor::new("white", "Pure White", Color::rgb(0xFF, 0xFF, 0xFF)),
    NamedColor::new("offwhite", "Soft Off-White", Color::rgb(0xEE, 0xED, 0xE9)),
    NamedColor::new("taupe", "Gentle Taupe", Color::rgb(0xE4, 0xDF, 0xD9)),
    NamedColor::new("navy", "Midnight Navy", Color::rgb(0x1A, 0x26, 0x33)),
    NamedColor::new("grey", "Sleek Gray", Color::rgb(0x81, 0x81, 0x81)),
];

/// Card corner rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CornerStyle {
    /// Square corners
    Sharp,
    /// Moderately rounded corners
    #[default]
    Soft,
    /// Pill-like corners
    ExtraSoft,
}

impl CornerStyle {
    /// All corner styles in menu order.
    pub const ALL: [CornerStyle; 3] = [CornerStyle::Sharp, CornerStyle::Soft, CornerStyle::ExtraSoft];

    /// Token used in options and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            CornerStyle::Sharp => "sharp",
            CornerStyle::Soft => "soft",
            CornerStyle::ExtraSoft => "extra-soft",
        }
    }

    /// Display name.
    pub fn label(&self) -> &'static str {
        match self {
            CornerStyle::Sharp => "Confident",
            CornerStyle::Soft => "Purposeful",
            CornerStyle::ExtraSoft => "Compassionate",
        }
    }

    /// Corner radius in pixels.
    pub fn radius(&self) -> u32 {
        match self {
            CornerStyle::Sharp => 0,
            CornerStyle::Soft => 12,
            CornerStyle::ExtraSoft => 40,
        }
    }
}

impl FromStr for CornerStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        CornerStyle::ALL
            .into_iter()
            .find(|corner| corner.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidStyle(format!("corner style '{}'", s)))
    }
}

/// Card border stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderVariant {
    /// Continuous accent stroke
    #[default]
    Solid,
    /// Dashed accent stroke
    Dashed,
    /// No stroke
    None,
}

impl BorderVariant {
    /// All border variants in menu order.
    pub const ALL: [BorderVariant; 3] = [
        BorderVariant::Solid,
        BorderVariant::Dashed,
        BorderVariant::None,
    ];

    /// Token used in options and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            BorderVariant::Solid => "solid",
            BorderVariant::Dashed => "dashed",
            BorderVariant::None => "none",
        }
    }

    /// Display name.
    pub fn label(&self) -> &'static str {
        match self {
            BorderVariant::Solid => "Bold",
            BorderVariant::Dashed => "Intentional",
            BorderVariant::None => "Minimalist",
        }
    }
}

impl FromStr for BorderVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        BorderVariant::ALL
            .into_iter()
            .find(|border| border.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidStyle(format!("border variant '{}'", s)))
    }
}

/// Visual style of an infographic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleOptions {
    /// Accent used for badges, connectors and borders
    pub accent: Color,

    /// Canvas background
    pub background: Color,

    /// Card corner rounding
    pub corner: CornerStyle,

    /// Card border stroke
    pub border: BorderVariant,
}

impl StyleOptions {
    /// Create new style options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the accent color.
    pub fn with_accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Set the corner style.
    pub fn with_corner(mut self, corner: CornerStyle) -> Self {
        self.corner = corner;
        self
    }

    /// Set the border variant.
    pub fn with_border(mut self, border: BorderVariant) -> Self {
        self.border = border;
        self
    }

    /// Primary text color for the current background.
    pub fn text_color(&self) -> Color {
        if self.background.is_dark() {
            Color::rgb(0xFF, 0xFF, 0xFF)
        } else {
            BRAND.text
        }
    }

    /// Secondary text color for the current background.
    pub fn muted_color(&self) -> Color {
        if self.background.is_dark() {
            BRAND.background
        } else {
            BRAND.muted
        }
    }
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            accent: BRAND.accent,
            background: BACKGROUND_COLORS[1].color,
            corner: CornerStyle::default(),
            border: BorderVariant::default(),
        }
    }
}
