//! Colon re-nesting pass.
//!
//! During construction a left-aligned line after a label like `Steps:`
//! cannot tell it belongs to that label, so it lands as a sibling. This
//! pass pulls such siblings under the label.

use super::{Node, NodeId, OutlineTree};

/// Moves the siblings that directly follow a colon-terminated node into it.
///
/// A run of moved siblings stops at the first sibling that has a different
/// level, is a heading, or is a colon label of the same kind (a peer label
/// that starts its own run). Nodes are visited children-first, so every
/// moved subtree has already been normalized and is not revisited.
pub fn nest_under_colons(tree: &mut OutlineTree) {
    for id in tree.postorder() {
        nest_children(tree, id);
    }
}

fn nest_children(tree: &mut OutlineTree, parent: NodeId) {
    let mut i = 0;
    while i < tree[parent].children.len() {
        let label = tree[parent].children[i];
        if tree[label].ends_with_colon() {
            while let Some(&next) = tree[parent].children.get(i + 1) {
                if ends_run(&tree[label], &tree[next]) {
                    break;
                }
                tree.move_to(next, label);
            }
        }
        i += 1;
    }
}

fn ends_run(label: &Node, sibling: &Node) -> bool {
    sibling.level != label.level
        || sibling.is_heading()
        || (sibling.ends_with_colon() && sibling.kind == label.kind)
}
