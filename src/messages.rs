//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::model::{NodeKind, NodePath};

/// Document-specific messages (content edits, insertion, templates)
#[derive(Debug, Clone)]
pub enum DocumentMsg {
    /// Insert typed text at the caret (free typing - snapshot is debounced)
    InsertText(String),
    /// Delete the character before the caret
    DeleteBackward,
    /// A palette component was dropped on the document.
    /// `target` is the resolved drop position, or None when the host
    /// could not resolve the drop coordinates to a tree position.
    DropComponent {
        payload: String,
        target: Option<NodePath>,
    },
    /// Insert a component at the caret (palette click / keyboard insert)
    InsertComponent(NodeKind),
    /// Replace the document with a named template skeleton
    ApplyTemplate(String),
    /// Replace the document with the empty-state placeholder
    Reset,
    /// Update the document title field (lives outside the tree)
    SetTitle(String),
}

/// History messages (snapshot capture, undo/redo)
#[derive(Debug, Clone)]
pub enum HistoryMsg {
    /// Capture a snapshot of the current document state now
    Snapshot,
    /// A debounced snapshot timer fired (after delay_ms from
    /// `Cmd::ScheduleSnapshot`). Stale revisions are dropped.
    SnapshotReady { revision: u64 },
    /// Restore the previous snapshot
    Undo,
    /// Restore the next snapshot
    Redo,
}

/// Export messages (PDF rendering lifecycle)
#[derive(Debug, Clone)]
pub enum ExportMsg {
    /// User asked for a PDF of the current document
    Requested,
    /// Rendering finished (async result from the host)
    Completed(Result<PathBuf, String>),
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Document messages (content editing, insertion)
    Document(DocumentMsg),
    /// History messages (snapshots, undo/redo)
    History(HistoryMsg),
    /// Export messages (PDF lifecycle)
    Export(ExportMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create an insert-text message
    pub fn insert_text(text: impl Into<String>) -> Self {
        Msg::Document(DocumentMsg::InsertText(text.into()))
    }

    /// Create an undo message
    pub fn undo() -> Self {
        Msg::History(HistoryMsg::Undo)
    }

    /// Create a redo message
    pub fn redo() -> Self {
        Msg::History(HistoryMsg::Redo)
    }
}
