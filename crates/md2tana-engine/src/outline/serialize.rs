use super::{NodeKind, OutlineTree};

/// First line of every Tana Paste document.
pub const TANA_MARKER: &str = "%%tana%%";

/// Indentation per nesting level.
pub const INDENT: &str = "  ";

const BULLET: &str = "- ";
const FENCE: &str = "```";

/// Writes the tree as Tana Paste: the marker line, then one bullet per node
/// in pre-order, indented two spaces per level below the root's children.
///
/// A `#` heading directly under the root is written as `!! text`; every
/// other heading is wrapped in `**`. Code nodes expand to a fence bullet,
/// one bullet per body line and a closing fence bullet.
pub fn to_tana_paste(tree: &OutlineTree) -> String {
    let mut lines = vec![TANA_MARKER.to_string()];

    for (id, depth) in tree.preorder() {
        let node = &tree[id];
        let indent = INDENT.repeat(depth.saturating_sub(1));
        let bullet = |text: &str| format!("{indent}{BULLET}{text}");

        match &node.kind {
            NodeKind::Root => {}
            NodeKind::Heading { bold: false } if depth == 1 => {
                lines.push(bullet(&format!("!! {}", node.content)));
            }
            NodeKind::Heading { .. } => {
                lines.push(bullet(&format!("**{}**", node.content)));
            }
            NodeKind::Bullet | NodeKind::Numbered | NodeKind::Text => {
                lines.push(bullet(&node.content));
            }
            NodeKind::Code(block) => {
                lines.push(bullet(&format!("{FENCE}{}", block.lang)));
                if block.body.is_empty() {
                    lines.push(bullet(""));
                } else {
                    lines.extend(block.body.lines().map(bullet));
                }
                lines.push(bullet(FENCE));
            }
        }
    }

    lines.join("\n")
}
