//! Document tree - the editable content model
//!
//! The tree is a flat list of top-level blocks, each of which may nest
//! children (the abstract body). The history manager never looks inside
//! it; snapshots go through the serialize/deserialize round-trip below.

use serde::{Deserialize, Serialize};

use super::node::{Node, NodeKind};

/// Hint text shown in an empty document
pub const TIP_TEXT: &str =
    "Click here and start typing, or drag a \"Title\" in from the palette.";

/// Path to a node in the tree: child indices from the root downwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePath(pub Vec<usize>);

impl NodePath {
    /// Path to a top-level block
    pub fn root(index: usize) -> Self {
        NodePath(vec![index])
    }

    /// The top-level block index this path descends through
    pub fn top_level(&self) -> Option<usize> {
        self.0.first().copied()
    }
}

/// The mutable document content model
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentTree {
    pub nodes: Vec<Node>,
}

impl DocumentTree {
    /// Create an empty document
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create the empty-state placeholder document (one tip block)
    pub fn with_tip() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Tip, TIP_TEXT)],
        }
    }

    /// Serialize the full tree to its snapshot form.
    ///
    /// The tree contains only strings, enums, and vectors, so
    /// serialization cannot fail.
    pub fn serialized_state(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Rebuild a tree from its snapshot form
    pub fn from_serialized(state: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(state)
    }

    /// Whether the document has no blocks at all
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of top-level blocks
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Resolve a path to a node
    pub fn node_at(&self, path: &NodePath) -> Option<&Node> {
        let (&first, rest) = path.0.split_first()?;
        let mut node = self.nodes.get(first)?;
        for &idx in rest {
            node = node.children.get(idx)?;
        }
        Some(node)
    }

    /// Resolve a path to a node, mutably
    pub fn node_at_mut(&mut self, path: &NodePath) -> Option<&mut Node> {
        let (&first, rest) = path.0.split_first()?;
        let mut node = self.nodes.get_mut(first)?;
        for &idx in rest {
            node = node.children.get_mut(idx)?;
        }
        Some(node)
    }

    /// Append a block at the end of the document, returning its path
    pub fn append(&mut self, node: Node) -> NodePath {
        self.nodes.push(node);
        NodePath::root(self.nodes.len() - 1)
    }

    /// Insert a block as a top-level sibling immediately after the block
    /// containing `path`. Falls back to appending when the path does not
    /// resolve to an existing block.
    pub fn insert_after(&mut self, path: &NodePath, node: Node) -> NodePath {
        match path.top_level() {
            Some(i) if i < self.nodes.len() => {
                self.nodes.insert(i + 1, node);
                NodePath::root(i + 1)
            }
            _ => self.append(node),
        }
    }

    /// Path to the last block of the document, descending into the last
    /// child at each level. None for an empty document.
    pub fn last_path(&self) -> Option<NodePath> {
        if self.nodes.is_empty() {
            return None;
        }
        let mut path = vec![self.nodes.len() - 1];
        let mut node = &self.nodes[self.nodes.len() - 1];
        while let Some(last) = node.children.last() {
            path.push(node.children.len() - 1);
            node = last;
        }
        Some(NodePath(path))
    }

    /// Remove every tip block, at any depth
    pub fn remove_tips(&mut self) {
        fn prune(nodes: &mut Vec<Node>) {
            nodes.retain(|n| n.kind != NodeKind::Tip);
            for node in nodes.iter_mut() {
                prune(&mut node.children);
            }
        }
        prune(&mut self.nodes);
    }

    /// Visit every node in the tree, mutably
    pub fn for_each_mut(&mut self, f: &mut impl FnMut(&mut Node)) {
        fn walk(nodes: &mut [Node], f: &mut impl FnMut(&mut Node)) {
            for node in nodes {
                f(node);
                walk(&mut node.children, f);
            }
        }
        walk(&mut self.nodes, f);
    }

    /// Ensure an empty document still offers a typing surface
    pub fn normalize(&mut self) {
        if self.nodes.is_empty() {
            self.nodes.push(Node::empty_block());
        }
    }

    /// Whether any block in the tree is a tip
    pub fn has_tip(&self) -> bool {
        self.nodes.iter().any(|n| n.kind == NodeKind::Tip)
    }
}
