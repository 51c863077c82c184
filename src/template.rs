//! Template assembler - canned document skeletons.
//!
//! Templates sequence the component factory; they carry no styling of
//! their own.

use crate::component;
use crate::model::{Node, NodeKind};

/// A built-in document template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateId {
    /// Title, body, one section, references
    Simple,
    /// Lab-report skeleton: abstract plus Introduction/Method/Results
    Lab,
    /// Title, one paragraph, references
    Short,
}

impl TemplateId {
    /// Stable identifier used in config and on the CLI
    pub fn id(&self) -> &'static str {
        match self {
            TemplateId::Simple => "simple",
            TemplateId::Lab => "lab",
            TemplateId::Short => "short",
        }
    }

    /// Parse a template name; unknown names yield None
    pub fn parse(name: &str) -> Option<TemplateId> {
        match name {
            "simple" => Some(TemplateId::Simple),
            "lab" => Some(TemplateId::Lab),
            "short" => Some(TemplateId::Short),
            _ => None,
        }
    }

    /// All built-in templates
    pub fn all() -> &'static [TemplateId] {
        &[TemplateId::Simple, TemplateId::Lab, TemplateId::Short]
    }
}

fn heading(text: &str) -> Node {
    Node::new(NodeKind::Heading, text)
}

/// Assemble the blocks for a template
pub fn assemble(template: TemplateId) -> Vec<Node> {
    match template {
        TemplateId::Simple => vec![
            component::create(NodeKind::Title),
            component::create(NodeKind::Paragraph),
            component::create(NodeKind::Heading),
            component::create(NodeKind::Paragraph),
            heading("References"),
            component::create(NodeKind::Reference),
        ],
        TemplateId::Lab => vec![
            component::create(NodeKind::Title),
            component::create(NodeKind::Abstract),
            heading("Introduction"),
            component::create(NodeKind::Paragraph),
            heading("Method"),
            component::create(NodeKind::Paragraph),
            heading("Results"),
            component::create(NodeKind::Paragraph),
            heading("References"),
            component::create(NodeKind::Reference),
        ],
        TemplateId::Short => vec![
            component::create(NodeKind::Title),
            component::create(NodeKind::Paragraph),
            heading("References"),
            component::create(NodeKind::Reference),
        ],
    }
}
