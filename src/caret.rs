//! Caret placement after programmatic tree mutations.
//!
//! The caret is transient: it is not part of any snapshot and is
//! recomputed after every insertion or restore so the user can keep
//! typing without clicking back into the document.

use crate::model::{DocumentTree, Node, NodePath};

/// The current text-insertion point: a node plus a char offset into its
/// text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caret {
    pub path: NodePath,
    pub offset: usize,
}

impl Caret {
    /// Caret collapsed at the end of the given node's text
    pub fn at_end_of(path: NodePath, node: &Node) -> Self {
        Self {
            offset: node.text_len(),
            path,
        }
    }
}

/// Collapse the caret to immediately after the last content of `node`
/// (the whole document when `node` is `None`).
///
/// Descends into the deepest last child; a childless node collapses to
/// the node itself. An empty document has nowhere to put a caret and
/// yields `None` rather than panicking.
pub fn place_caret_at_end(tree: &DocumentTree, node: Option<&NodePath>) -> Option<Caret> {
    let path = match node {
        Some(path) => {
            let mut path = path.clone();
            let mut node = tree.node_at(&path)?;
            while let Some(last) = node.children.last() {
                path.0.push(node.children.len() - 1);
                node = last;
            }
            path
        }
        None => tree.last_path()?,
    };
    let node = tree.node_at(&path)?;
    Some(Caret::at_end_of(path, node))
}

/// Insert `node` at the caret, or append it at the end of the document
/// when the caret is absent or no longer resolves.
///
/// A fresh empty editable block is always appended immediately after the
/// insertion and the returned caret sits inside it, so typing can
/// continue without any further click. The caller records a history
/// snapshot as its next step; insertion is always checkpoint-worthy.
pub fn insert_at_caret(tree: &mut DocumentTree, caret: Option<&Caret>, node: Node) -> Caret {
    let inserted = match caret {
        Some(c) if tree.node_at(&c.path).is_some() => tree.insert_after(&c.path, node),
        _ => tree.append(node),
    };
    let fresh = tree.insert_after(&inserted, Node::empty_block());
    Caret {
        path: fresh,
        offset: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeKind;

    fn tree_with(texts: &[&str]) -> DocumentTree {
        let mut tree = DocumentTree::new();
        for t in texts {
            tree.append(Node::new(NodeKind::Paragraph, *t));
        }
        tree
    }

    #[test]
    fn test_place_caret_at_document_end() {
        let tree = tree_with(&["first", "second"]);
        let caret = place_caret_at_end(&tree, None).unwrap();
        assert_eq!(caret.path, NodePath::root(1));
        assert_eq!(caret.offset, 6);
    }

    #[test]
    fn test_place_caret_descends_into_children() {
        let mut tree = tree_with(&["first"]);
        tree.append(Node::with_children(
            NodeKind::Abstract,
            "Abstract",
            vec![Node::new(NodeKind::Plain, "body")],
        ));

        let caret = place_caret_at_end(&tree, None).unwrap();
        assert_eq!(caret.path, NodePath(vec![1, 0]));
        assert_eq!(caret.offset, 4);
    }

    #[test]
    fn test_place_caret_on_childless_node() {
        let tree = tree_with(&["solo"]);
        let caret = place_caret_at_end(&tree, Some(&NodePath::root(0))).unwrap();
        assert_eq!(caret.path, NodePath::root(0));
        assert_eq!(caret.offset, 4);
    }

    #[test]
    fn test_place_caret_on_empty_tree() {
        let tree = DocumentTree::new();
        assert!(place_caret_at_end(&tree, None).is_none());
    }

    #[test]
    fn test_insert_at_caret_adds_fresh_block() {
        let mut tree = tree_with(&["first", "second"]);
        let caret = Caret {
            path: NodePath::root(0),
            offset: 5,
        };

        let new_caret =
            insert_at_caret(&mut tree, Some(&caret), Node::new(NodeKind::Quote, "quoted"));

        let kinds: Vec<NodeKind> = tree.nodes.iter().map(|n| n.kind).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::Paragraph,
                NodeKind::Quote,
                NodeKind::Plain,
                NodeKind::Paragraph,
            ]
        );
        // Caret lands in the fresh empty block after the insertion
        assert_eq!(new_caret.path, NodePath::root(2));
        assert_eq!(new_caret.offset, 0);
        assert_eq!(tree.nodes[2].text, "");
    }

    #[test]
    fn test_insert_without_caret_appends() {
        let mut tree = tree_with(&["only"]);
        let caret = insert_at_caret(&mut tree, None, Node::new(NodeKind::Heading, "H"));
        assert_eq!(tree.nodes[1].kind, NodeKind::Heading);
        assert_eq!(tree.nodes[2].kind, NodeKind::Plain);
        assert_eq!(caret.path, NodePath::root(2));
    }

    #[test]
    fn test_insert_with_dangling_caret_falls_back_to_append() {
        let mut tree = tree_with(&["only"]);
        let stale = Caret {
            path: NodePath::root(7),
            offset: 0,
        };
        insert_at_caret(&mut tree, Some(&stale), Node::new(NodeKind::Heading, "H"));
        assert_eq!(tree.nodes[1].kind, NodeKind::Heading);
    }
}
