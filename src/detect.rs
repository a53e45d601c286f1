//! Structural cue detection for process descriptions.
//!
//! These helpers recognize the markers a person uses when typing out a
//! process by hand: numbered lines, bullets and `->` arrows.

use regex::Regex;
use std::sync::OnceLock;

/// Token separating steps in arrow mode.
pub const ARROW: &str = "->";

/// Characters accepted as a leading bullet.
const BULLETS: [char; 4] = ['•', '◦', '*', '-'];

/// Characters that split a segment into head and tail.
const HEAD_TAIL_DELIMITERS: [char; 3] = [':', '-', '\n'];

/// How a content block is cut into steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseMode {
    /// Steps are delimited by `->`
    Arrow,
    /// Each non-empty line is a step
    Line,
}

impl std::fmt::Display for ParseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseMode::Arrow => f.write_str("arrow"),
            ParseMode::Line => f.write_str("line"),
        }
    }
}

fn enumeration_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+[.)]\s*").unwrap())
}

fn numbered_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+[.)]").unwrap())
}

/// Select the parse mode for a content block.
///
/// Any occurrence of `->` selects arrow mode, even one that sits inside
/// a description.
///
/// # Example
/// ```
/// use infostep::detect::{detect_mode, ParseMode};
///
/// assert_eq!(detect_mode("Start -> End"), ParseMode::Arrow);
/// assert_eq!(detect_mode("1. Start\n2. End"), ParseMode::Line);
/// ```
pub fn detect_mode(content: &str) -> ParseMode {
    if content.contains(ARROW) {
        ParseMode::Arrow
    } else {
        ParseMode::Line
    }
}

/// Check whether a line looks like a step rather than a heading.
///
/// True for lines starting with an enumeration like "1." or "2)",
/// lines containing an arrow, and lines starting with a bullet.
pub fn looks_like_marker(line: &str) -> bool {
    numbered_regex().is_match(line) || line.contains(ARROW) || line.starts_with(BULLETS)
}

/// Remove a leading enumeration marker ("1.", "2) ") from a line.
pub fn strip_enumeration(line: &str) -> &str {
    match enumeration_regex().find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Split a segment into a trimmed head and tail.
///
/// The segment is cut at every colon, hyphen and newline. The first
/// piece is the head; the remaining pieces are joined with spaces.
///
/// # Example
/// ```
/// use infostep::detect::split_head_tail;
///
/// assert_eq!(
///     split_head_tail("Plan: Define scope"),
///     ("Plan".to_string(), "Define scope".to_string())
/// );
/// ```
pub fn split_head_tail(segment: &str) -> (String, String) {
    let mut pieces = segment.split(HEAD_TAIL_DELIMITERS);
    let head = pieces.next().unwrap_or_default().trim().to_string();
    let tail = pieces.collect::<Vec<_>>().join(" ").trim().to_string();
    (head, tail)
}
