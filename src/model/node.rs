//! Document tree nodes - semantically tagged content blocks

use serde::{Deserialize, Serialize};

/// Semantic kind of a document block.
///
/// Kinds carry meaning only. How a block looks is decided by whichever
/// surface renders the tree (editor view, print stylesheet) and is never
/// stored on the node itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    /// Centered document title block
    Title,
    /// Section heading
    Heading,
    /// Body paragraph
    Paragraph,
    /// Block quotation
    Quote,
    /// Abstract block with a nested summary body
    Abstract,
    /// Bibliography entry
    Reference,
    /// Unstructured editable block (the default typing surface)
    Plain,
    /// Empty-state hint shown in a fresh document. Not document content;
    /// stripped by sanitation and by export.
    Tip,
}

impl NodeKind {
    /// Parse a drag/drop payload into a kind.
    ///
    /// Unknown payloads fall back to the plain paragraph kind rather than
    /// failing the drop.
    pub fn parse(payload: &str) -> NodeKind {
        match payload {
            "title" => NodeKind::Title,
            "heading" => NodeKind::Heading,
            "paragraph" => NodeKind::Paragraph,
            "quote" => NodeKind::Quote,
            "abstract" => NodeKind::Abstract,
            "reference" => NodeKind::Reference,
            "plain" => NodeKind::Plain,
            _ => NodeKind::Paragraph,
        }
    }

    /// Stable identifier used as the drag payload and the semantic class
    /// name in exported markup.
    pub fn id(&self) -> &'static str {
        match self {
            NodeKind::Title => "title",
            NodeKind::Heading => "heading",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Quote => "quote",
            NodeKind::Abstract => "abstract",
            NodeKind::Reference => "reference",
            NodeKind::Plain => "plain",
            NodeKind::Tip => "tip",
        }
    }

    /// Whether blocks of this kind accept typed input
    pub fn is_editable(&self) -> bool {
        !matches!(self, NodeKind::Tip)
    }
}

fn default_editable() -> bool {
    true
}

/// A single block in the document tree.
///
/// A node owns its semantic kind, its text content, and (for the abstract
/// block) nested child blocks. There is deliberately no style or color
/// field: palette colors are a palette-only concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    /// Editable text content of this block
    pub text: String,
    /// Whether this block currently accepts typed input. Serialized
    /// markup may predate the flag, so deserialization defaults it and
    /// sanitation re-asserts it from the kind.
    #[serde(default = "default_editable")]
    pub editable: bool,
    /// Nested blocks (the abstract body lives here)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Create a leaf node with the given kind and text
    pub fn new(kind: NodeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            editable: kind.is_editable(),
            children: Vec::new(),
        }
    }

    /// Create a node with nested children
    pub fn with_children(kind: NodeKind, text: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            kind,
            text: text.into(),
            editable: kind.is_editable(),
            children,
        }
    }

    /// A fresh empty typing block, appended after every component insertion
    pub fn empty_block() -> Self {
        Node::new(NodeKind::Plain, "")
    }

    /// Number of chars in this node's own text (not counting children)
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }
}
