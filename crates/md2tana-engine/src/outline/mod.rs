//! # Outline Tree
//!
//! The document tree built from classified lines, stored as an arena.
//!
//! ## Modules
//!
//! - **`builder`**: `OutlineBuilder` state machine that turns lines into a tree
//! - **`normalize`**: re-nests siblings under colon-terminated labels
//! - **`reinsert`**: swaps code placeholders for their extracted blocks
//! - **`serialize`**: writes the tree as Tana Paste text
//!
//! ## Key Invariants
//!
//! - Node `0` is the root; it has no parent and is never rendered
//! - Every other node appears exactly once in its parent's `children`
//! - Nodes are only appended or moved, never removed, so ids stay valid

pub mod builder;
pub mod normalize;
pub mod reinsert;
pub mod serialize;

use std::ops::{Index, IndexMut};

use crate::parsing::CodeBlock;

pub use builder::OutlineBuilder;

/// Index of a node in the tree arena.
pub type NodeId = usize;

/// The kind of an outline node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    /// A `#` heading, or a bold-only line when `bold` is set.
    Heading {
        bold: bool,
    },
    Bullet,
    Numbered,
    Text,
    Code(CodeBlock),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    /// Line text with list, heading and quote markers removed.
    pub content: String,
    /// Depth hint used for parenting decisions, not for rendering.
    pub level: usize,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Index of the extracted code block this node stands in for.
    pub placeholder: Option<usize>,
}

impl Node {
    fn new(kind: NodeKind, content: &str, level: usize, parent: Option<NodeId>) -> Self {
        Node {
            kind,
            content: content.to_string(),
            level,
            parent,
            children: Vec::new(),
            placeholder: None,
        }
    }

    /// True when the content, ignoring trailing whitespace, ends with `:`.
    pub fn ends_with_colon(&self) -> bool {
        self.content.trim_end().ends_with(':')
    }

    pub fn is_heading(&self) -> bool {
        matches!(self.kind, NodeKind::Heading { .. })
    }

    pub fn is_bold_heading(&self) -> bool {
        matches!(self.kind, NodeKind::Heading { bold: true })
    }
}

/// A rooted document tree using the arena pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineTree {
    nodes: Vec<Node>,
}

impl OutlineTree {
    pub const ROOT: NodeId = 0;

    pub fn new() -> Self {
        OutlineTree {
            nodes: vec![Node::new(NodeKind::Root, "", 0, None)],
        }
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the tree holds nothing but the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Appends a new last child to `parent` and returns its id.
    pub fn append(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        content: &str,
        level: usize,
    ) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::new(kind, content, level, Some(parent)));
        self[parent].children.push(id);
        id
    }

    /// Moves `id` to be the last child of `new_parent`, shifting the levels
    /// of its whole subtree so that `id` sits one below `new_parent`.
    ///
    /// `new_parent` must not be inside the subtree of `id`.
    pub(crate) fn move_to(&mut self, id: NodeId, new_parent: NodeId) {
        if let Some(old_parent) = self[id].parent {
            self[old_parent].children.retain(|&c| c != id);
        }
        self[id].parent = Some(new_parent);
        self[new_parent].children.push(id);

        let target = self[new_parent].level + 1;
        let current = self[id].level;
        for (node, _) in self.preorder_from(id) {
            let level = &mut self[node].level;
            *level = (*level + target).saturating_sub(current);
        }
    }

    /// Ids of all nodes in depth-first pre-order, paired with their depth
    /// (root = 0).
    pub fn preorder(&self) -> Vec<(NodeId, usize)> {
        self.preorder_from(Self::ROOT)
    }

    /// Ids of all nodes in depth-first post-order (children before parents).
    pub fn postorder(&self) -> Vec<NodeId> {
        // reversed pre-order with children pushed left to right is a post-order
        let mut ids = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![Self::ROOT];
        while let Some(id) = stack.pop() {
            ids.push(id);
            stack.extend(self[id].children.iter().copied());
        }
        ids.reverse();
        ids
    }

    /// Tree depth of `id`, counting edges up to the root.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut cursor = self[id].parent;
        while let Some(p) = cursor {
            depth += 1;
            cursor = self[p].parent;
        }
        depth
    }

    fn preorder_from(&self, start: NodeId) -> Vec<(NodeId, usize)> {
        let mut out = Vec::new();
        let mut stack = vec![(start, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            out.push((id, depth));
            stack.extend(self[id].children.iter().rev().map(|&c| (c, depth + 1)));
        }
        out
    }
}

impl Default for OutlineTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<NodeId> for OutlineTree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id]
    }
}

impl IndexMut<NodeId> for OutlineTree {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.nodes[id]
    }
}
