use std::fmt::Write;

use crate::outline::{NodeKind, OutlineTree};

/// Renders the tree one node per line as `Kind(level) "content"`, indented
/// by depth. The root is omitted.
pub fn format_tree(tree: &OutlineTree) -> String {
    let mut out = String::new();
    for (id, depth) in tree.preorder().into_iter().skip(1) {
        let node = &tree[id];
        let indent = "  ".repeat(depth - 1);
        let kind = match &node.kind {
            NodeKind::Root => "Root",
            NodeKind::Heading { bold: false } => "Heading",
            NodeKind::Heading { bold: true } => "BoldHeading",
            NodeKind::Bullet => "Bullet",
            NodeKind::Numbered => "Numbered",
            NodeKind::Text => "Text",
            NodeKind::Code(_) => "Code",
        };
        let detail = match &node.kind {
            NodeKind::Code(block) => format!("lang={:?} body={:?}", block.lang, block.body),
            _ => format!("{:?}", node.content),
        };
        // writing to a String cannot fail
        let _ = writeln!(out, "{indent}{kind}({}) {detail}", node.level);
    }
    out
}
