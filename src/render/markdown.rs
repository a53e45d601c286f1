//! Markdown rendering for parsed documents.

use crate::error::Result;
use crate::model::{ParsedDocument, Step};

use super::RenderOptions;

/// Convert a document to Markdown.
pub fn to_markdown(doc: &ParsedDocument, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to Markdown.
    pub fn render(&self, doc: &ParsedDocument) -> Result<String> {
        let mut output = String::new();

        if self.options.include_frontmatter {
            output.push_str(&doc.to_yaml_frontmatter());
            output.push('\n');
        }

        output.push_str(&format!("# {}\n\n", self.escape(&doc.title)));
        if let Some(ref subtitle) = doc.subtitle {
            if !subtitle.is_empty() {
                output.push_str(&format!("*{}*\n\n", self.escape(subtitle)));
            }
        }

        for step in &doc.steps {
            self.render_step(&mut output, step);
        }

        Ok(output.trim().to_string() + "\n")
    }

    fn render_step(&self, output: &mut String, step: &Step) {
        let title = self.escape(&step.title);
        let description = self.escape(&step.description);

        output.push_str(&format!("{}. ", step.number));
        match (title.is_empty(), description.is_empty()) {
            (false, false) => output.push_str(&format!("**{}**: {}", title, description)),
            (false, true) => output.push_str(&format!("**{}**", title)),
            (true, _) => output.push_str(&description),
        }
        output.push('\n');
    }

    fn escape(&self, text: &str) -> String {
        if self.options.escape_special_chars {
            escape_markdown(text)
        } else {
            text.to_string()
        }
    }
}

/// Escape special Markdown characters.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}
