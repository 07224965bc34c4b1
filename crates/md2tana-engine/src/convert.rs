use crate::{
    outline::{OutlineBuilder, OutlineTree, reinsert::reinsert_code_blocks, serialize},
    parsing::parse_lines,
};

/// Converts Markdown-like text into Tana Paste outline text.
///
/// Total over its input: any string, including an empty one or one with an
/// unclosed code fence, yields an outline starting with
/// [`serialize::TANA_MARKER`].
pub fn convert(markdown: &str) -> String {
    serialize::to_tana_paste(&build_outline(markdown))
}

/// Runs every pass up to, but not including, serialization.
pub fn build_outline(markdown: &str) -> OutlineTree {
    let parsed = parse_lines(markdown);
    let mut builder = OutlineBuilder::new();
    for line in &parsed.lines {
        builder.push(line);
    }

    let mut tree = builder.finish();
    let code_blocks = parsed.code_blocks.len();
    reinsert_code_blocks(&mut tree, parsed.code_blocks);

    log::debug!(
        "built outline: {} lines, {} code blocks, {} nodes",
        parsed.lines.len(),
        code_blocks,
        tree.len() - 1
    );
    tree
}
