//! Document-level types.

use super::{Step, StepIcon};
use crate::detect::ParseMode;
use serde::{Deserialize, Serialize};

/// A parsed process description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocument {
    /// Document title, extracted or defaulted; never empty
    pub title: String,

    /// Optional subtitle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Steps in display order
    pub steps: Vec<Step>,
}

impl ParsedDocument {
    /// Create a document from already-extracted parts.
    pub fn new(title: impl Into<String>, subtitle: Option<String>, steps: Vec<Step>) -> Self {
        Self {
            title: title.into(),
            subtitle,
            steps,
        }
    }

    /// Get the number of steps in the document.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Get a step by number (1-indexed).
    pub fn get_step(&self, number: u32) -> Option<&Step> {
        if number == 0 {
            return None;
        }
        self.steps.get((number - 1) as usize)
    }

    /// Check if the document has any steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Parse mode implied by the icon hints, if there are any steps.
    pub fn mode(&self) -> Option<ParseMode> {
        self.steps.first().map(|step| match step.icon {
            StepIcon::Arrow => ParseMode::Arrow,
            StepIcon::Checkmark => ParseMode::Line,
        })
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        let mut parts = vec![self.title.clone()];
        if let Some(ref subtitle) = self.subtitle {
            parts.push(subtitle.clone());
        }
        parts.extend(self.steps.iter().map(|step| step.plain_text()));
        parts.join("\n")
    }

    /// Whitespace-separated word count of titles and descriptions.
    pub fn word_count(&self) -> usize {
        self.plain_text().split_whitespace().count()
    }

    /// Generate YAML frontmatter for Markdown output.
    pub fn to_yaml_frontmatter(&self) -> String {
        let mut lines = vec!["---".to_string()];

        lines.push(format!("title: \"{}\"", escape_yaml(&self.title)));
        if let Some(ref subtitle) = self.subtitle {
            lines.push(format!("subtitle: \"{}\"", escape_yaml(subtitle)));
        }
        if let Some(mode) = self.mode() {
            lines.push(format!("mode: {}", mode));
        }
        lines.push(format!("steps: {}", self.steps.len()));

        lines.push("---".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParsedDocument {
        ParsedDocument::new(
            "Release",
            Some("Generated from manual input".to_string()),
            vec![
                Step::new(0, "Plan", "Define scope", StepIcon::Checkmark),
                Step::new(1, "Build", "Ship code", StepIcon::Checkmark),
            ],
        )
    }

    #[test]
    fn test_get_step_is_one_based() {
        let doc = sample();
        assert!(doc.get_step(0).is_none());
        assert_eq!(doc.get_step(1).unwrap().title, "Plan");
        assert_eq!(doc.get_step(2).unwrap().title, "Build");
        assert!(doc.get_step(3).is_none());
    }

    #[test]
    fn test_mode_from_icons() {
        assert_eq!(sample().mode(), Some(ParseMode::Line));
        let empty = ParsedDocument::new("Empty", None, Vec::new());
        assert_eq!(empty.mode(), None);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_plain_text_and_words() {
        let doc = sample();
        let text = doc.plain_text();
        assert!(text.starts_with("Release\nGenerated from manual input\n"));
        assert!(text.contains("Build: Ship code"));
        assert_eq!(doc.word_count(), 1 + 4 + 3 + 3);
    }

    #[test]
    fn test_yaml_frontmatter() {
        let mut doc = sample();
        doc.title = "Say \"hi\"".to_string();
        let yaml = doc.to_yaml_frontmatter();
        assert!(yaml.starts_with("---\n"));
        assert!(yaml.contains("title: \"Say \\\"hi\\\"\""));
        assert!(yaml.contains("mode: line"));
        assert!(yaml.contains("steps: 2"));
        assert!(yaml.ends_with("---\n"));
    }

    #[test]
    fn test_subtitle_skipped_when_absent() {
        let doc = ParsedDocument::new("T", None, Vec::new());
        let json = serde_json::to_string(&doc).unwrap();
        assert!(!json.contains("subtitle"));
    }
}
