//! Parsing options and configuration.

/// Placeholder text used when the input does not provide it.
///
/// Description templates substitute `{title}` with the step title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    /// Title used when no title line is found
    pub title: String,

    /// Subtitle attached to every document
    pub subtitle: String,

    /// Description template for steps found in arrow mode
    pub arrow_description: String,

    /// Description template for steps found in line mode
    pub line_description: String,
}

impl Placeholders {
    /// Token replaced with the step title in description templates.
    pub const TITLE_TOKEN: &'static str = "{title}";

    /// Fill a description template with a step title.
    pub fn fill(template: &str, title: &str) -> String {
        template.replace(Self::TITLE_TOKEN, title)
    }
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            title: "Process Overview".to_string(),
            subtitle: "Generated from manual input".to_string(),
            arrow_description: "Execution of {title}".to_string(),
            line_description: "Description for {title}".to_string(),
        }
    }
}

/// Options for parsing process descriptions.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Minimum trimmed input length, in characters
    pub min_input_len: usize,

    /// Maximum length of a first line that may become the title
    pub max_title_len: usize,

    /// Placeholder text for missing titles and descriptions
    pub placeholders: Placeholders,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum trimmed input length.
    pub fn with_min_input_len(mut self, len: usize) -> Self {
        self.min_input_len = len;
        self
    }

    /// Set the title length limit for the first-line heuristic.
    pub fn with_max_title_len(mut self, len: usize) -> Self {
        self.max_title_len = len;
        self
    }

    /// Replace all placeholder text.
    pub fn with_placeholders(mut self, placeholders: Placeholders) -> Self {
        self.placeholders = placeholders;
        self
    }

    /// Set the default document title.
    pub fn with_default_title(mut self, title: impl Into<String>) -> Self {
        self.placeholders.title = title.into();
        self
    }

    /// Set the default subtitle.
    pub fn with_default_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.placeholders.subtitle = subtitle.into();
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            min_input_len: 3,
            max_title_len: 50,
            placeholders: Placeholders::default(),
        }
    }
}
