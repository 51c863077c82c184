//! Component factory - builds clean document blocks.
//!
//! Every block leaves here with default placeholder text and nothing
//! else. Palette colors in particular never reach this output; the node
//! type has no field to carry them.

use crate::model::{Node, NodeKind};

/// Create a new block of the given semantic kind with its default
/// placeholder content.
pub fn create(kind: NodeKind) -> Node {
    match kind {
        NodeKind::Title => Node::new(NodeKind::Title, "Centered title"),
        NodeKind::Heading => Node::new(NodeKind::Heading, "Heading"),
        NodeKind::Paragraph => Node::new(NodeKind::Paragraph, "Write your paragraph here..."),
        NodeKind::Quote => Node::new(NodeKind::Quote, "Quote: write the quotation here."),
        NodeKind::Abstract => Node::with_children(
            NodeKind::Abstract,
            "Abstract",
            vec![Node::new(NodeKind::Plain, "Brief summary...")],
        ),
        NodeKind::Reference => {
            Node::new(NodeKind::Reference, "Last, F. M. (2020). Title. Publisher.")
        }
        NodeKind::Plain => Node::empty_block(),
        NodeKind::Tip => Node::new(NodeKind::Tip, crate::model::TIP_TEXT),
    }
}

/// Create a block from a raw drag payload. Unknown payloads fall back to
/// the plain paragraph kind.
pub fn create_from_payload(payload: &str) -> Node {
    create(NodeKind::parse(payload))
}
