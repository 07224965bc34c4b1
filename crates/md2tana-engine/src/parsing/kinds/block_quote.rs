/// Blockquote syntax with owned delimiter constant.
///
/// Only one level of quoting is removed per line: `> > text` becomes
/// `> text`, which then classifies as plain text.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips a single `>` marker and the whitespace run after it.
    ///
    /// Leading whitespace before the marker is ignored, and so is any
    /// indentation inside the quote: `>   - item` reads as a top-level list
    /// item. Returns `None` when the line is not quoted.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        let rest = line.trim_start().strip_prefix(Self::PREFIX)?;
        Some(rest.trim_start())
    }
}
