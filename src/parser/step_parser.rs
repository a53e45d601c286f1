//! Step parser implementation.

use super::{ParseOptions, Placeholders};
use crate::detect::{
    detect_mode, looks_like_marker, split_head_tail, strip_enumeration, ParseMode, ARROW,
};
use crate::error::{Error, Result};
use crate::model::{ParsedDocument, Step, StepIcon};

/// Explicit title label, matched case-insensitively.
const TITLE_LABEL: &str = "title:";

/// Byte-order mark some editors write at the start of text files.
const BOM: char = '\u{FEFF}';

/// Parse a process description with default options.
///
/// # Example
///
/// ```
/// let doc = infostep::parse("1. Plan: Define scope\n2. Build: Ship code").unwrap();
/// assert_eq!(doc.title, "Process Overview");
/// assert_eq!(doc.steps[1].title, "Build");
/// ```
pub fn parse(text: &str) -> Result<ParsedDocument> {
    StepParser::new().parse(text)
}

/// Parse a process description with custom options.
pub fn parse_with_options(text: &str, options: ParseOptions) -> Result<ParsedDocument> {
    StepParser::with_options(options).parse(text)
}

/// Parser turning free-form process text into a [`ParsedDocument`].
///
/// The parser holds configuration only. Every call to [`StepParser::parse`]
/// is independent, so one parser can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct StepParser {
    options: ParseOptions,
}

impl StepParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Get the parse options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse text into a document.
    ///
    /// Fails with [`Error::EmptyInput`] when the trimmed text is shorter
    /// than the configured minimum, and with [`Error::NoStepsFound`] when
    /// no step could be extracted.
    pub fn parse(&self, text: &str) -> Result<ParsedDocument> {
        let text = text.trim_start_matches(|c: char| c == BOM || c.is_whitespace());
        if text.trim().chars().count() < self.options.min_input_len {
            return Err(Error::EmptyInput);
        }

        let normalized = normalize_line_endings(text);
        let mut lines: Vec<&str> = normalized
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.is_empty() {
            return Err(Error::NoStepsFound);
        }

        let title = self.extract_title(&mut lines);
        let content = lines.join("\n");

        let mode = detect_mode(&content);
        log::debug!("Parsing {} lines in {} mode", lines.len(), mode);

        let steps = match mode {
            ParseMode::Arrow => self.arrow_steps(&content),
            ParseMode::Line => self.line_steps(&lines),
        };

        if steps.is_empty() {
            return Err(Error::NoStepsFound);
        }

        Ok(ParsedDocument::new(
            title,
            Some(self.options.placeholders.subtitle.clone()),
            steps,
        ))
    }

    /// Take the title from the first line when it carries one.
    ///
    /// Consumes the first line when it is labeled "Title:", or when it is
    /// a short unmarked line followed by at least one more line.
    fn extract_title(&self, lines: &mut Vec<&str>) -> String {
        let placeholder = &self.options.placeholders.title;
        let Some(first) = lines.first().copied() else {
            return placeholder.clone();
        };

        if let Some(rest) = strip_title_label(first) {
            lines.remove(0);
            let title = rest.trim();
            log::debug!("Title from label: {:?}", title);
            return if title.is_empty() {
                placeholder.clone()
            } else {
                title.to_string()
            };
        }

        if lines.len() > 1
            && first.chars().count() < self.options.max_title_len
            && !looks_like_marker(first)
        {
            lines.remove(0);
            log::debug!("Title from first line: {:?}", first);
            return first.to_string();
        }

        placeholder.clone()
    }

    fn arrow_steps(&self, content: &str) -> Vec<Step> {
        let template = &self.options.placeholders.arrow_description;
        content
            .split(ARROW)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .enumerate()
            .map(|(index, segment)| build_step(index, segment, template, StepIcon::Arrow))
            .collect()
    }

    fn line_steps(&self, lines: &[&str]) -> Vec<Step> {
        let template = &self.options.placeholders.line_description;
        lines
            .iter()
            .map(|line| strip_enumeration(line).trim())
            .enumerate()
            .map(|(index, line)| build_step(index, line, template, StepIcon::Checkmark))
            .collect()
    }
}

fn build_step(index: usize, segment: &str, template: &str, icon: StepIcon) -> Step {
    let (title, tail) = split_head_tail(segment);
    let description = if tail.is_empty() {
        Placeholders::fill(template, &title).trim().to_string()
    } else {
        tail
    };
    log::trace!("Step {}: {:?} / {:?}", index + 1, title, description);
    Step::new(index, title, description, icon)
}

fn strip_title_label(line: &str) -> Option<&str> {
    let label = line.get(..TITLE_LABEL.len())?;
    if label.eq_ignore_ascii_case(TITLE_LABEL) {
        Some(&line[TITLE_LABEL.len()..])
    } else {
        None
    }
}

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_list() {
        let doc = parse("1. Plan: Define scope\n2. Build: Ship code\n3. Launch: Go live").unwrap();

        assert_eq!(doc.title, "Process Overview");
        assert_eq!(doc.subtitle.as_deref(), Some("Generated from manual input"));
        let titles: Vec<_> = doc.steps.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Plan", "Build", "Launch"]);
        let descriptions: Vec<_> = doc.steps.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(descriptions, ["Define scope", "Ship code", "Go live"]);
        for (i, step) in doc.steps.iter().enumerate() {
            assert_eq!(step.number as usize, i + 1);
            assert_eq!(step.id, format!("step-{}", i));
            assert_eq!(step.icon, StepIcon::Checkmark);
        }
    }

    #[test]
    fn test_arrow_flow() {
        let doc = parse("Start -> Process -> End").unwrap();

        assert_eq!(doc.title, "Process Overview");
        assert_eq!(doc.step_count(), 3);
        assert_eq!(doc.steps[0].title, "Start");
        assert_eq!(doc.steps[0].description, "Execution of Start");
        assert_eq!(doc.steps[1].description, "Execution of Process");
        assert_eq!(doc.steps[2].description, "Execution of End");
        assert!(doc.steps.iter().all(|s| s.icon == StepIcon::Arrow));
    }

    #[test]
    fn test_whitespace_only_is_empty_input() {
        assert!(matches!(parse(" \n \n"), Err(Error::EmptyInput)));
        assert!(matches!(parse(""), Err(Error::EmptyInput)));
        assert!(matches!(parse("  ab  "), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_single_line_is_not_title() {
        let doc = parse("OnlyOneLine").unwrap();
        assert_eq!(doc.title, "Process Overview");
        assert_eq!(doc.step_count(), 1);
        assert_eq!(doc.steps[0].title, "OnlyOneLine");
        assert_eq!(doc.steps[0].description, "Description for OnlyOneLine");
    }

    #[test]
    fn test_title_label() {
        let doc = parse("Title: Quarterly Rollout\nPrepare\nShip").unwrap();
        assert_eq!(doc.title, "Quarterly Rollout");
        assert_eq!(doc.step_count(), 2);
        assert_eq!(doc.steps[0].title, "Prepare");
    }

    #[test]
    fn test_title_label_case_insensitive() {
        let doc = parse("TITLE:Launch Plan\nA -> B").unwrap();
        assert_eq!(doc.title, "Launch Plan");
        assert_eq!(doc.step_count(), 2);
    }

    #[test]
    fn test_title_label_alone_finds_no_steps() {
        assert!(matches!(
            parse("Title: Lonely heading"),
            Err(Error::NoStepsFound)
        ));
    }

    #[test]
    fn test_empty_title_label_falls_back() {
        let doc = parse("Title:\nGather\nReview").unwrap();
        assert_eq!(doc.title, "Process Overview");
        assert_eq!(doc.step_count(), 2);
    }

    #[test]
    fn test_short_first_line_becomes_title() {
        let doc = parse("Onboarding\n1. Sign up\n2. Verify email").unwrap();
        assert_eq!(doc.title, "Onboarding");
        assert_eq!(doc.step_count(), 2);
        assert_eq!(doc.steps[0].title, "Sign up");
    }

    #[test]
    fn test_marker_first_line_is_not_title() {
        let doc = parse("1. Sign up\n2. Verify").unwrap();
        assert_eq!(doc.title, "Process Overview");
        assert_eq!(doc.step_count(), 2);

        let doc = parse("• Sign up\nVerify").unwrap();
        assert_eq!(doc.title, "Process Overview");

        let doc = parse("Draft -> Review\nPublish").unwrap();
        assert_eq!(doc.title, "Process Overview");
    }

    #[test]
    fn test_long_first_line_is_not_title() {
        let first = "This first line is definitely longer than fifty characters in total";
        let doc = parse(&format!("{}\nSecond", first)).unwrap();
        assert_eq!(doc.title, "Process Overview");
        assert_eq!(doc.step_count(), 2);
    }

    #[test]
    fn test_title_length_limit_is_exclusive() {
        let below = "Q".repeat(49);
        let doc = parse(&format!("{}\nDraft\nShip", below)).unwrap();
        assert_eq!(doc.title, below);
        assert_eq!(doc.step_count(), 2);

        let at_limit = "Q".repeat(50);
        let doc = parse(&format!("{}\nDraft\nShip", at_limit)).unwrap();
        assert_eq!(doc.title, "Process Overview");
        assert_eq!(doc.step_count(), 3);
        assert_eq!(doc.steps[0].title, at_limit);
    }

    #[test]
    fn test_title_length_counts_chars() {
        let below = "é".repeat(49);
        let doc = parse(&format!("{}\nDraft", below)).unwrap();
        assert_eq!(doc.title, below);
    }

    #[test]
    fn test_leading_bom_is_ignored() {
        let doc = parse("\u{FEFF}Title: Quarterly Rollout\n1. Pilot\n2. Expand").unwrap();
        assert_eq!(doc.title, "Quarterly Rollout");
        assert_eq!(doc.step_count(), 2);
        assert_eq!(doc.steps[0].title, "Pilot");

        assert!(matches!(parse("\u{FEFF}a "), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_consecutive_arrows_drop_empty_segment() {
        let doc = parse("A -> -> B").unwrap();
        assert_eq!(doc.step_count(), 2);
        assert_eq!(doc.steps[1].title, "B");
        assert_eq!(doc.steps[1].number, 2);
    }

    #[test]
    fn test_arrow_segment_with_description() {
        let doc = parse("Design: sketch screens -> Build - write code -> Ship").unwrap();
        assert_eq!(doc.steps[0].title, "Design");
        assert_eq!(doc.steps[0].description, "sketch screens");
        assert_eq!(doc.steps[1].title, "Build");
        assert_eq!(doc.steps[1].description, "write code");
        assert_eq!(doc.steps[2].description, "Execution of Ship");
    }

    #[test]
    fn test_arrow_segment_spanning_lines() {
        let doc = parse("Title: Pipeline\nCollect\nraw data -> Clean").unwrap();
        assert_eq!(doc.title, "Pipeline");
        assert_eq!(doc.step_count(), 2);
        assert_eq!(doc.steps[0].title, "Collect");
        assert_eq!(doc.steps[0].description, "raw data");
    }

    #[test]
    fn test_short_first_line_title_before_arrows() {
        let doc = parse("Collect\nraw data -> Clean").unwrap();
        assert_eq!(doc.title, "Collect");
        assert_eq!(doc.steps[0].title, "raw data");
        assert_eq!(doc.steps[1].title, "Clean");
    }

    #[test]
    fn test_bare_marker_gives_empty_title() {
        let doc = parse("1.\n2. Build").unwrap();
        assert_eq!(doc.step_count(), 2);
        assert_eq!(doc.steps[0].title, "");
        assert_eq!(doc.steps[0].description, "Description for");
    }

    #[test]
    fn test_blank_input_without_length_guard() {
        let options = ParseOptions::new().with_min_input_len(0);
        assert!(matches!(
            parse_with_options(" \n\t\n", options),
            Err(Error::NoStepsFound)
        ));
    }

    #[test]
    fn test_only_arrows_finds_no_steps() {
        assert!(matches!(parse("-> -> ->"), Err(Error::NoStepsFound)));
    }

    #[test]
    fn test_crlf_input() {
        let doc = parse("1. Plan: Scope\r\n2. Build: Code\r\n").unwrap();
        assert_eq!(doc.step_count(), 2);
        assert_eq!(doc.steps[1].description, "Code");
    }

    #[test]
    fn test_custom_placeholders() {
        let options = ParseOptions::new().with_placeholders(Placeholders {
            title: "Ablauf".to_string(),
            subtitle: "Manuell erstellt".to_string(),
            arrow_description: "Ausführung: {title}".to_string(),
            line_description: "Schritt {title}".to_string(),
        });
        let doc = parse_with_options("Start -> Ende", options).unwrap();
        assert_eq!(doc.title, "Ablauf");
        assert_eq!(doc.subtitle.as_deref(), Some("Manuell erstellt"));
        assert_eq!(doc.steps[0].description, "Ausführung: Start");
    }

    #[test]
    fn test_repeat_parse_is_identical() {
        let text = "Launch\nPlan: scope -> Build -> Ship: release";
        assert_eq!(parse(text).unwrap(), parse(text).unwrap());
    }

    #[test]
    fn test_strip_title_label() {
        assert_eq!(strip_title_label("Title: X"), Some(" X"));
        assert_eq!(strip_title_label("title:"), Some(""));
        assert_eq!(strip_title_label("Titles: X"), None);
        assert_eq!(strip_title_label("Tit"), None);
        assert_eq!(strip_title_label("Tïtle: X"), None);
    }
}
