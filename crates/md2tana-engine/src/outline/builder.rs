use crate::parsing::{
    LineClass, LineKind,
    kinds::{HashHeading, ListItem, Marker},
};

use super::{NodeId, NodeKind, OutlineTree, normalize};

const ANCHOR_SLOTS: usize = HashHeading::MAX_LEVEL as usize;

/// Single forward pass turning classified lines into an [`OutlineTree`].
///
/// Parent selection is driven by four pieces of state:
///
/// - **heading anchors**: the latest `#` heading at each level, so a new
///   heading attaches under the deepest shallower one
/// - **colon parents**: `(indent, node)` for open labels ending in `:`;
///   these win over indentation
/// - **list stack**: `(indent, node)` for open list items
/// - **current**: the latest heading, the fallback parent
///
/// Any heading resets the colon and list state.
pub struct OutlineBuilder {
    tree: OutlineTree,
    heading_anchors: [Option<NodeId>; ANCHOR_SLOTS],
    colon_parents: Vec<(usize, NodeId)>,
    list_stack: Vec<(usize, NodeId)>,
    current: NodeId,
    last_heading: Option<NodeId>,
}

impl OutlineBuilder {
    pub fn new() -> Self {
        Self {
            tree: OutlineTree::new(),
            heading_anchors: [None; ANCHOR_SLOTS],
            colon_parents: vec![],
            list_stack: vec![],
            current: OutlineTree::ROOT,
            last_heading: None,
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        match &c.kind {
            LineKind::Blank => {}
            LineKind::Heading { level, text } => self.push_heading(c.indent, *level, text),
            LineKind::BoldHeading { text } => self.push_bold_heading(c.indent, text),
            LineKind::ListItem(item) => self.push_list_item(item),
            LineKind::Text { text } => {
                self.push_text(c.indent, text);
            }
            LineKind::CodeBlock { index } => {
                let node = self.push_text(c.indent, "");
                self.tree[node].placeholder = Some(*index);
            }
        }
    }

    /// Runs the colon re-nesting pass and returns the tree.
    pub fn finish(mut self) -> OutlineTree {
        normalize::nest_under_colons(&mut self.tree);
        self.tree
    }

    fn push_heading(&mut self, indent: usize, level: u8, text: &str) {
        let slot = usize::from(level.clamp(1, HashHeading::MAX_LEVEL)) - 1;
        let parent = self.heading_anchors[..slot]
            .iter()
            .rev()
            .find_map(|anchor| *anchor)
            .unwrap_or(OutlineTree::ROOT);

        let node = self.tree.append(
            parent,
            NodeKind::Heading { bold: false },
            text,
            usize::from(level),
        );
        self.heading_anchors[slot] = Some(node);
        self.heading_anchors[slot + 1..].fill(None);

        self.enter_heading(node, indent);
    }

    fn push_bold_heading(&mut self, indent: usize, text: &str) {
        // consecutive bold lines form a flat run of siblings
        let parent = match self.last_heading {
            Some(prev) if self.tree[prev].is_bold_heading() => {
                self.tree[prev].parent.unwrap_or(self.current)
            }
            _ => self.current,
        };

        let node = self.attach(parent, NodeKind::Heading { bold: true }, text);
        self.enter_heading(node, indent);
    }

    fn enter_heading(&mut self, node: NodeId, indent: usize) {
        self.current = node;
        self.last_heading = Some(node);
        self.colon_parents.clear();
        self.list_stack.clear();
        if self.tree[node].ends_with_colon() {
            self.colon_parents.push((indent, node));
        }
    }

    fn push_list_item(&mut self, item: &ListItem<'_>) {
        let indent = item.indent;
        let parent = self
            .colon_parent_for(indent)
            .or_else(|| {
                self.list_stack
                    .iter()
                    .rev()
                    .find(|(open, _)| *open < indent)
                    .map(|&(_, node)| node)
            })
            .unwrap_or(self.current);

        let kind = match item.marker {
            Marker::Bullet => NodeKind::Bullet,
            Marker::Numbered => NodeKind::Numbered,
        };
        let node = self.attach(parent, kind, item.content);

        self.close_list_items(indent);
        self.list_stack.push((indent, node));
        self.track_colon(indent, node);
    }

    fn push_text(&mut self, indent: usize, text: &str) -> NodeId {
        // a left-aligned line ends any open list
        if indent == 0 {
            self.list_stack.clear();
        }

        let parent = match self.colon_parent_for(indent) {
            Some(label) => label,
            None => {
                self.close_list_items(indent);
                self.list_stack
                    .last()
                    .map_or(self.current, |&(_, node)| node)
            }
        };

        let node = self.attach(parent, NodeKind::Text, text);
        self.track_colon(indent, node);
        node
    }

    /// Innermost open label indented strictly less than `indent`.
    fn colon_parent_for(&self, indent: usize) -> Option<NodeId> {
        self.colon_parents
            .iter()
            .rev()
            .find(|(label_indent, _)| *label_indent < indent)
            .map(|&(_, node)| node)
    }

    fn close_list_items(&mut self, indent: usize) {
        while self
            .list_stack
            .last()
            .is_some_and(|&(open, _)| open >= indent)
        {
            self.list_stack.pop();
        }
    }

    fn track_colon(&mut self, indent: usize, node: NodeId) {
        if self.tree[node].ends_with_colon() {
            self.colon_parents.retain(|&(open, _)| open < indent);
            self.colon_parents.push((indent, node));
        }
    }

    fn attach(&mut self, parent: NodeId, kind: NodeKind, text: &str) -> NodeId {
        let level = self.tree[parent].level + 1;
        self.tree.append(parent, kind, text, level)
    }
}

impl Default for OutlineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_lines;
    use pretty_assertions::assert_eq;

    fn build(md: &str) -> OutlineTree {
        let mut builder = OutlineBuilder::new();
        for line in &parse_lines(md).lines {
            builder.push(line);
        }
        builder.finish()
    }

    /// `(depth, content)` for every non-root node in pre-order.
    fn shape(tree: &OutlineTree) -> Vec<(usize, &str)> {
        tree.preorder()
            .into_iter()
            .skip(1)
            .map(|(id, depth)| (depth, tree[id].content.as_str()))
            .collect()
    }

    #[test]
    fn hash_headings_nest_by_level() {
        let tree = build("# A\n## B\n### C\n## D\n# E");
        assert_eq!(
            shape(&tree),
            vec![(1, "A"), (2, "B"), (3, "C"), (2, "D"), (1, "E")]
        );
    }

    #[test]
    fn skipped_heading_level_attaches_to_nearest_shallower() {
        let tree = build("# A\n### C\n## B\n#### D");
        assert_eq!(shape(&tree), vec![(1, "A"), (2, "C"), (2, "B"), (3, "D")]);
    }

    #[test]
    fn heading_without_ancestors_sits_at_root() {
        let tree = build("### Deep first\n# Top");
        assert_eq!(shape(&tree), vec![(1, "Deep first"), (1, "Top")]);
    }

    #[test]
    fn content_follows_current_heading() {
        let tree = build("# A\ntext\n- item\n## B\nmore");
        assert_eq!(
            shape(&tree),
            vec![(1, "A"), (2, "text"), (2, "item"), (2, "B"), (3, "more")]
        );
    }

    #[test]
    fn list_items_nest_by_indent() {
        let tree = build("- a\n  - b\n    - c\n  - d\n- e");
        assert_eq!(
            shape(&tree),
            vec![(1, "a"), (2, "b"), (3, "c"), (2, "d"), (1, "e")]
        );
    }

    #[test]
    fn dedent_between_open_indents_pops_to_shallower_item() {
        let tree = build("- a\n    - b\n  - c");
        assert_eq!(shape(&tree), vec![(1, "a"), (2, "b"), (2, "c")]);
    }

    #[test]
    fn colon_item_adopts_indented_items() {
        let tree = build("- A:\n  - B\n  - C");
        assert_eq!(shape(&tree), vec![(1, "A:"), (2, "B"), (2, "C")]);
    }

    #[test]
    fn colon_label_wins_over_list_stack() {
        let tree = build("- a\n  - Label:\n      - x\n    - y");
        assert_eq!(
            shape(&tree),
            vec![(1, "a"), (2, "Label:"), (3, "x"), (3, "y")]
        );
    }

    #[test]
    fn colon_text_line_adopts_following_lines() {
        let tree = build("Ingredients:\n- flour\n- sugar\n\nSteps:\n1. mix\n2. bake");
        assert_eq!(
            shape(&tree),
            vec![
                (1, "Ingredients:"),
                (2, "flour"),
                (2, "sugar"),
                (1, "Steps:"),
                (2, "mix"),
                (2, "bake"),
            ]
        );
    }

    #[test]
    fn colon_heading_adopts_indented_items() {
        let tree = build("## Setup:\n  - install\n  - run");
        assert_eq!(shape(&tree), vec![(1, "Setup:"), (2, "install"), (2, "run")]);
    }

    #[test]
    fn heading_resets_colon_context() {
        let tree = build("Notes:\n  - one\n# Next\n  - two");
        assert_eq!(
            shape(&tree),
            vec![(1, "Notes:"), (2, "one"), (1, "Next"), (2, "two")]
        );
    }

    #[test]
    fn consecutive_bold_headings_are_siblings() {
        let tree = build("# Doc\n**One**\n- a\n**Two**\n- b");
        assert_eq!(
            shape(&tree),
            vec![(1, "Doc"), (2, "One"), (3, "a"), (2, "Two"), (3, "b")]
        );
        let one = tree[tree[OutlineTree::ROOT].children[0]].children[0];
        assert!(tree[one].is_bold_heading());
    }

    #[test]
    fn bold_heading_after_hash_heading_nests() {
        let tree = build("# Doc\n**Part**\ntext");
        assert_eq!(shape(&tree), vec![(1, "Doc"), (2, "Part"), (3, "text")]);
    }

    #[test]
    fn left_aligned_text_closes_list() {
        let tree = build("# H\n- a\n  - b\nafter\n  - c");
        assert_eq!(
            shape(&tree),
            vec![(1, "H"), (2, "a"), (3, "b"), (2, "after"), (2, "c")]
        );
    }

    #[test]
    fn indented_text_continues_list_item() {
        let tree = build("- a\n  continuation");
        assert_eq!(shape(&tree), vec![(1, "a"), (2, "continuation")]);
    }

    #[test]
    fn blockquote_markers_are_stripped() {
        let tree = build("> # Quote\n> - point\n> said");
        assert_eq!(shape(&tree), vec![(1, "Quote"), (2, "point"), (2, "said")]);
    }

    #[test]
    fn code_placeholder_keeps_block_index() {
        let tree = build("- run:\n  ```sh\n  make\n  ```");
        let run = tree[OutlineTree::ROOT].children[0];
        let code = tree[run].children[0];
        assert_eq!(tree[code].placeholder, Some(0));
        assert_eq!(tree[code].content, "");
    }

    #[test]
    fn blank_lines_are_ignored() {
        let tree = build("\n\n   \n");
        assert!(tree.is_empty());
    }
}
