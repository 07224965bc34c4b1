//! # Line Parsing
//!
//! Two phases run before any tree is built:
//!
//! 1. **Extraction** (`extract`): fenced code blocks are lifted out of the
//!    line stream and replaced by indexed placeholders
//! 2. **Classification** (`classify`): every remaining line becomes a
//!    [`LineClass`] holding its indentation and a closed [`LineKind`]
//!
//! Syntax knowledge for each construct lives in `kinds`, not in the
//! classifier.

pub mod classify;
pub mod extract;
pub mod kinds;

pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use extract::{CodeBlock, Extraction, SourceLine, extract_code_blocks};

/// Classified lines plus the code blocks their placeholders refer to.
#[derive(Debug)]
pub struct ParsedLines<'a> {
    pub lines: Vec<LineClass<'a>>,
    pub code_blocks: Vec<CodeBlock>,
}

pub fn parse_lines(text: &str) -> ParsedLines<'_> {
    let classifier = MarkdownLineClassifier;
    let Extraction { lines, blocks } = extract_code_blocks(text);

    ParsedLines {
        lines: lines.iter().map(|l| classifier.classify(l)).collect(),
        code_blocks: blocks,
    }
}

/// Number of leading whitespace characters.
pub(crate) fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}
