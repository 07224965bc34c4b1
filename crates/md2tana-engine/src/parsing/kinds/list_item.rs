use std::sync::OnceLock;

use regex::Regex;

/// Marker types for list items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `-`, `*` or `+`
    Bullet,
    /// `1.`, `2.`, etc. The number itself is not kept.
    Numbered,
}

/// A bulleted or numbered list line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem<'a> {
    /// Width of the leading whitespace run, in characters.
    pub indent: usize,
    pub marker: Marker,
    /// Text after the marker, trimmed.
    pub content: &'a str,
}

impl<'a> ListItem<'a> {
    /// Parses `line` as a list item. Numbered markers are tried first.
    pub fn parse(line: &'a str) -> Option<Self> {
        static NUMBERED_REGEX: OnceLock<Regex> = OnceLock::new();
        static BULLET_REGEX: OnceLock<Regex> = OnceLock::new();

        let numbered = NUMBERED_REGEX
            .get_or_init(|| Regex::new(r"^(\s*)\d+\.\s+(.*)$").expect("Invalid numbered regex"));
        let bullet = BULLET_REGEX
            .get_or_init(|| Regex::new(r"^(\s*)[-*+]\s+(.*)$").expect("Invalid bullet regex"));

        let (marker, caps) = if let Some(caps) = numbered.captures(line) {
            (Marker::Numbered, caps)
        } else {
            (Marker::Bullet, bullet.captures(line)?)
        };

        Some(ListItem {
            indent: caps.get(1)?.as_str().chars().count(),
            marker,
            content: caps.get(2)?.as_str().trim(),
        })
    }
}
