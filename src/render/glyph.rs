//! Icon hint to glyph mapping.

use crate::model::StepIcon;

/// Character drawn for an icon hint in text output.
pub fn text_glyph(icon: StepIcon) -> char {
    match icon {
        StepIcon::Arrow => '→',
        StepIcon::Checkmark => '✓',
    }
}

/// SVG path data for an icon hint, centered on the origin in a 16px box.
pub fn svg_path(icon: StepIcon) -> &'static str {
    match icon {
        StepIcon::Arrow => "M-7 0 H7 M2 -5 L7 0 L2 5",
        StepIcon::Checkmark => "M-6 0 L-2 5 L7 -5",
    }
}
