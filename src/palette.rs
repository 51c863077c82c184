//! Component palette registry.
//!
//! The palette shows each draggable component with a label and a swatch
//! color. The swatch exists for the palette UI alone; the component
//! factory never sees it and document nodes cannot store it.

use crate::model::NodeKind;

/// A draggable entry in the component palette
#[derive(Debug, Clone, Copy)]
pub struct PaletteEntry {
    pub kind: NodeKind,
    pub label: &'static str,
    /// Swatch color shown next to the label in the palette UI
    pub swatch: &'static str,
}

/// Static registry of all palette entries
pub const PALETTE: &[PaletteEntry] = &[
    PaletteEntry {
        kind: NodeKind::Title,
        label: "Title",
        swatch: "#2d7ff9",
    },
    PaletteEntry {
        kind: NodeKind::Heading,
        label: "Heading",
        swatch: "#8b5cf6",
    },
    PaletteEntry {
        kind: NodeKind::Paragraph,
        label: "Paragraph",
        swatch: "#10b981",
    },
    PaletteEntry {
        kind: NodeKind::Quote,
        label: "Quote",
        swatch: "#f59e0b",
    },
    PaletteEntry {
        kind: NodeKind::Abstract,
        label: "Abstract",
        swatch: "#ec4899",
    },
    PaletteEntry {
        kind: NodeKind::Reference,
        label: "Reference",
        swatch: "#64748b",
    },
];

/// Look up the palette entry for a kind, if it is palette-visible
pub fn entry_for(kind: NodeKind) -> Option<&'static PaletteEntry> {
    PALETTE.iter().find(|e| e.kind == kind)
}
