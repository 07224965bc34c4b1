use super::{
    extract::SourceLine,
    indent_width,
    kinds::{BlockQuote, BoldHeading, HashHeading, ListItem},
};

/// What a single line is, decided once from local facts only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Whitespace only, or a bare `>`.
    Blank,
    /// `#` heading with its absolute level (1-6).
    Heading { level: u8, text: &'a str },
    /// A line that is only `**text**`; its level is relative to its parent.
    BoldHeading { text: &'a str },
    /// Bulleted or numbered list item.
    ListItem(ListItem<'a>),
    /// Anything else.
    Text { text: &'a str },
    /// Placeholder for an extracted fenced code block.
    CodeBlock { index: usize },
}

/// Classification of a single line.
///
/// This is phase 1 of tree building: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// Leading whitespace width of the raw line, before any `>` is stripped.
    pub indent: usize,
    pub kind: LineKind<'a>,
}

/// Classifies individual lines for the tree building phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// One blockquote marker is stripped first, then heading, bold heading
    /// and list item patterns are tried in that order.
    pub fn classify<'a>(&self, line: &SourceLine<'a>) -> LineClass<'a> {
        let raw = match *line {
            SourceLine::Text(raw) => raw.trim_end(),
            SourceLine::CodeBlock { indent, index } => {
                return LineClass {
                    indent,
                    kind: LineKind::CodeBlock { index },
                };
            }
        };

        let indent = indent_width(raw);
        let body = BlockQuote::strip_prefix(raw).unwrap_or(raw);

        let kind = if body.trim().is_empty() {
            LineKind::Blank
        } else if let Some((level, text)) = HashHeading::parse(body) {
            LineKind::Heading { level, text }
        } else if let Some(text) = BoldHeading::parse(body.trim_start()) {
            LineKind::BoldHeading { text }
        } else if let Some(item) = ListItem::parse(body) {
            LineKind::ListItem(item)
        } else {
            LineKind::Text { text: body.trim() }
        };

        LineClass { indent, kind }
    }
}
