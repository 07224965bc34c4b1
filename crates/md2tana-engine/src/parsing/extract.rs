//! Fenced code block extraction.
//!
//! Code bodies are raw zones: no line inside a fence is ever classified.
//! Each block is lifted out of the line stream and replaced by a single
//! [`SourceLine::CodeBlock`] placeholder that refers to it by index.

use super::{indent_width, kinds::CodeFence};

/// A fenced code block lifted out of the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Info string after the opening fence, possibly empty.
    pub lang: String,
    /// Verbatim body lines joined by `\n`, trailing whitespace trimmed.
    pub body: String,
}

/// A line of the source after code extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLine<'a> {
    /// An ordinary line, untouched.
    Text(&'a str),
    /// Placeholder for `Extraction::blocks[index]`, indented like its opening fence.
    CodeBlock { indent: usize, index: usize },
}

/// Result of [`extract_code_blocks`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Extraction<'a> {
    pub lines: Vec<SourceLine<'a>>,
    pub blocks: Vec<CodeBlock>,
}

#[derive(Debug)]
enum FenceState {
    Outside,
    Inside {
        indent: usize,
        lang: String,
        body: String,
    },
}

/// Splits `text` into lines, replacing each fenced code block with a placeholder.
///
/// An unterminated fence is flushed at end of input as if it had been
/// closed there, so no content is lost.
pub fn extract_code_blocks(text: &str) -> Extraction<'_> {
    let mut out = Extraction::default();
    let mut state = FenceState::Outside;

    for line in text.lines() {
        match CodeFence::sig(line) {
            Some(lang) => match std::mem::replace(&mut state, FenceState::Outside) {
                FenceState::Outside => {
                    state = FenceState::Inside {
                        indent: indent_width(line),
                        lang: lang.to_string(),
                        body: String::new(),
                    };
                }
                closed @ FenceState::Inside { .. } => flush(&mut out, closed),
            },
            None => match &mut state {
                FenceState::Outside => out.lines.push(SourceLine::Text(line)),
                FenceState::Inside { body, .. } => {
                    body.push_str(line);
                    body.push('\n');
                }
            },
        }
    }

    if let FenceState::Inside { lang, .. } = &state {
        log::warn!("unterminated code fence (lang {lang:?}) flushed at end of input");
    }
    flush(&mut out, state);

    out
}

fn flush(out: &mut Extraction<'_>, state: FenceState) {
    if let FenceState::Inside { indent, lang, body } = state {
        let index = out.blocks.len();
        out.blocks.push(CodeBlock {
            lang,
            body: body.trim_end().to_string(),
        });
        out.lines.push(SourceLine::CodeBlock { indent, index });
    }
}
