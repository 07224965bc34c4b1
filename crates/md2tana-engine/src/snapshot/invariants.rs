use crate::outline::{NodeKind, OutlineTree};

/// Validates the structure of a finished tree.
///
/// Asserts that:
/// - Node 0 is the only `Root` and has no parent
/// - Every other node lists its parent, and that parent lists it exactly once
/// - Every node is reachable from the root exactly once
/// - No code placeholder is left behind
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(tree: &OutlineTree) {
    let root = &tree[OutlineTree::ROOT];
    assert_eq!(root.kind, NodeKind::Root, "node 0 is not the root");
    assert!(root.parent.is_none(), "root has a parent: {:?}", root.parent);

    let order = tree.preorder();
    assert_eq!(
        order.len(),
        tree.len(),
        "reachable nodes ({}) differ from arena size ({})",
        order.len(),
        tree.len()
    );

    let mut seen = vec![false; tree.len()];
    for (id, _) in order {
        assert!(!seen[id], "node {id} reached twice");
        seen[id] = true;

        let node = &tree[id];
        assert!(
            node.placeholder.is_none(),
            "node {id} still holds placeholder {:?}",
            node.placeholder
        );
        if id == OutlineTree::ROOT {
            continue;
        }

        assert_ne!(node.kind, NodeKind::Root, "node {id} is a second root");
        let parent = node
            .parent
            .unwrap_or_else(|| panic!("node {id} has no parent"));
        let listed = tree[parent].children.iter().filter(|&&c| c == id).count();
        assert_eq!(
            listed, 1,
            "node {id} listed {listed} times by its parent {parent}"
        );
    }
}
