use crate::parsing::CodeBlock;

use super::{NodeKind, OutlineTree};

/// Turns every placeholder node into a [`NodeKind::Code`] node.
///
/// Each extracted block is handed out at most once; a placeholder whose
/// block has already been taken (or never existed) is left as empty text.
pub fn reinsert_code_blocks(tree: &mut OutlineTree, blocks: Vec<CodeBlock>) {
    let mut blocks: Vec<Option<CodeBlock>> = blocks.into_iter().map(Some).collect();

    for (id, _) in tree.preorder() {
        let Some(index) = tree[id].placeholder.take() else {
            continue;
        };
        if let Some(block) = blocks.get_mut(index).and_then(Option::take) {
            let node = &mut tree[id];
            node.kind = NodeKind::Code(block);
            node.content.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(lang: &str, body: &str) -> CodeBlock {
        CodeBlock {
            lang: lang.into(),
            body: body.into(),
        }
    }

    #[test]
    fn placeholders_become_code_nodes() {
        let mut tree = OutlineTree::new();
        let a = tree.append(OutlineTree::ROOT, NodeKind::Text, "", 1);
        let b = tree.append(a, NodeKind::Text, "", 2);
        tree[a].placeholder = Some(1);
        tree[b].placeholder = Some(0);

        reinsert_code_blocks(&mut tree, vec![block("py", "x = 1"), block("", "ls")]);

        assert_eq!(tree[a].kind, NodeKind::Code(block("", "ls")));
        assert_eq!(tree[b].kind, NodeKind::Code(block("py", "x = 1")));
        assert_eq!(tree[a].placeholder, None);
        assert_eq!(tree[b].placeholder, None);
    }

    #[test]
    fn ordinary_nodes_are_untouched() {
        let mut tree = OutlineTree::new();
        let t = tree.append(OutlineTree::ROOT, NodeKind::Text, "words", 1);

        reinsert_code_blocks(&mut tree, vec![block("", "unused")]);

        assert_eq!(tree[t].kind, NodeKind::Text);
        assert_eq!(tree[t].content, "words");
    }

    #[test]
    fn block_is_used_once() {
        let mut tree = OutlineTree::new();
        let a = tree.append(OutlineTree::ROOT, NodeKind::Text, "", 1);
        let b = tree.append(OutlineTree::ROOT, NodeKind::Text, "", 1);
        tree[a].placeholder = Some(0);
        tree[b].placeholder = Some(0);

        reinsert_code_blocks(&mut tree, vec![block("", "once")]);

        assert!(matches!(tree[a].kind, NodeKind::Code(_)));
        assert_eq!(tree[b].kind, NodeKind::Text);
        assert_eq!(tree[b].placeholder, None);
    }
}
