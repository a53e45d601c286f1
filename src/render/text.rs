//! Plain text rendering for parsed documents.

use crate::error::Result;
use crate::model::ParsedDocument;

use super::glyph::text_glyph;
use super::RenderOptions;

/// Convert a document to a plain text outline.
pub fn to_text(doc: &ParsedDocument, _options: &RenderOptions) -> Result<String> {
    let mut output = String::new();

    output.push_str(&doc.title);
    output.push('\n');
    if let Some(ref subtitle) = doc.subtitle {
        output.push_str(subtitle);
        output.push('\n');
    }

    for step in &doc.steps {
        output.push('\n');
        output.push_str(&format!(
            "{} {}. {}\n",
            text_glyph(step.icon),
            step.number,
            step.title
        ));
        if !step.description.is_empty() {
            output.push_str(&format!("   {}\n", step.description));
        }
    }

    Ok(output.trim().to_string())
}
