use std::sync::OnceLock;

use regex::Regex;

/// ATX-style heading: one to six `#` followed by whitespace and text.
pub struct HashHeading;

impl HashHeading {
    pub const MAX_LEVEL: u8 = 6;

    /// Parses `line` as a hash heading, returning `(level, text)`.
    ///
    /// The marker must start the line; indented `#` lines are not headings.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = HEADING_REGEX
            .get_or_init(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("Invalid heading regex"));

        let caps = regex.captures(line)?;
        let level = caps.get(1)?.as_str().len() as u8;
        let text = caps.get(2)?.as_str().trim();
        Some((level, text))
    }
}

/// A line made of nothing but `**text**`, used as a heading.
pub struct BoldHeading;

impl BoldHeading {
    pub const DELIMITER: &'static str = "**";

    /// Parses `line` as a bold pseudo-heading, returning the inner text.
    ///
    /// `**a** and **b**` is not a bold heading: the wrapped text may not
    /// contain another delimiter pair.
    pub fn parse(line: &str) -> Option<&str> {
        static BOLD_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = BOLD_REGEX
            .get_or_init(|| Regex::new(r"^\*\*(.+?)\*\*\s*$").expect("Invalid bold heading regex"));

        let inner = regex.captures(line)?.get(1)?.as_str();
        if inner.contains(Self::DELIMITER) {
            return None;
        }
        let text = inner.trim();
        (!text.is_empty()).then_some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", Some((1, "Title")))]
    #[case("###### Deep", Some((6, "Deep")))]
    #[case("##   Spaced out  ", Some((2, "Spaced out")))]
    #[case("####### Seven", None)]
    #[case("#NoSpace", None)]
    #[case("#", None)]
    #[case("  # Indented", None)]
    #[case("Not # a heading", None)]
    fn parse_hash_heading(#[case] line: &str, #[case] expected: Option<(u8, &str)>) {
        assert_eq!(HashHeading::parse(line), expected);
    }

    #[rstest]
    #[case("**Summary**", Some("Summary"))]
    #[case("**Steps:**  ", Some("Steps:"))]
    #[case("** padded **", Some("padded"))]
    #[case("**a** and **b**", None)]
    #[case("**Note**: trailing", None)]
    #[case("**   **", None)]
    #[case("*italic*", None)]
    #[case("text **bold**", None)]
    fn parse_bold_heading(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(BoldHeading::parse(line), expected);
    }
}
