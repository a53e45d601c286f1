//! Step-level types.

use serde::{Deserialize, Serialize};

/// One titled, described step of a process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Positional key, unique within one document (e.g. "step-0")
    pub id: String,

    /// 1-based position in the document
    pub number: u32,

    /// Trimmed step title (may be empty)
    pub title: String,

    /// Trimmed description, possibly synthesized from a template
    pub description: String,

    /// Symbolic icon hint chosen by the parse mode
    pub icon: StepIcon,
}

impl Step {
    /// Create a step at the given 0-based position.
    pub fn new(
        index: usize,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: StepIcon,
    ) -> Self {
        Self {
            id: format!("step-{}", index),
            number: index as u32 + 1,
            title: title.into(),
            description: description.into(),
            icon,
        }
    }

    /// Title and description as a single line.
    pub fn plain_text(&self) -> String {
        match (self.title.is_empty(), self.description.is_empty()) {
            (false, false) => format!("{}: {}", self.title, self.description),
            (false, true) => self.title.clone(),
            (true, _) => self.description.clone(),
        }
    }
}

/// Icon hint attached to every step.
///
/// The parser only picks the tag; mapping it to a glyph is up to the
/// renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepIcon {
    /// Step came from an arrow-separated flow
    Arrow,
    /// Step came from a line or numbered list
    Checkmark,
}

impl StepIcon {
    /// Stable identifier used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepIcon::Arrow => "arrow",
            StepIcon::Checkmark => "checkmark",
        }
    }
}

impl std::fmt::Display for StepIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_positional_fields() {
        let step = Step::new(2, "Launch", "Go live", StepIcon::Checkmark);
        assert_eq!(step.id, "step-2");
        assert_eq!(step.number, 3);
    }

    #[test]
    fn test_step_plain_text() {
        let step = Step::new(0, "Plan", "Define scope", StepIcon::Arrow);
        assert_eq!(step.plain_text(), "Plan: Define scope");

        let untitled = Step::new(0, "", "Description for", StepIcon::Checkmark);
        assert_eq!(untitled.plain_text(), "Description for");
    }

    #[test]
    fn test_icon_serialization() {
        let json = serde_json::to_string(&StepIcon::Checkmark).unwrap();
        assert_eq!(json, "\"checkmark\"");
        let icon: StepIcon = serde_json::from_str("\"arrow\"").unwrap();
        assert_eq!(icon, StepIcon::Arrow);
    }
}
