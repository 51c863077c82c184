//! Editor session model - the complete state of one editor instance
//!
//! All state lives in an explicit [`EditorSession`] passed to every
//! operation, so multiple independent editors can coexist and tests need
//! no global setup.

pub mod document;
pub mod node;

pub use document::{DocumentTree, NodePath, TIP_TEXT};
pub use node::{Node, NodeKind};

use crate::caret::{self, Caret};
use crate::config::EditorConfig;
use crate::history::History;
use crate::template::{self, TemplateId};

/// Derived enablement state for UI trigger controls, refreshed after
/// every update (undo/redo buttons, export button).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub undo_enabled: bool,
    pub redo_enabled: bool,
    pub export_enabled: bool,
}

/// One editor instance: the document tree, its snapshot history, the
/// caret, and the surrounding session state.
#[derive(Debug, Clone)]
pub struct EditorSession {
    /// The editable content model
    pub document: DocumentTree,
    /// Bounded snapshot log for undo/redo
    pub history: History,
    /// Current text-insertion point, if any
    pub caret: Option<Caret>,
    /// Document title field. Not part of the tree; feeds the export
    /// title block and filename only.
    pub title: String,
    /// Session configuration
    pub config: EditorConfig,
    /// Monotonic edit counter. Debounced snapshot timers carry the
    /// revision they were scheduled at; a mismatch on delivery means the
    /// timer is stale and its snapshot is skipped.
    pub revision: u64,
    /// Whether a PDF export is in flight (disables the export trigger)
    pub export_busy: bool,
    /// One-line status message for the UI surface
    pub status: Option<String>,
    /// Derived control enablement
    pub controls: Controls,
}

impl EditorSession {
    /// Create a session holding the empty-state placeholder document,
    /// with the history seeded from it.
    pub fn new(config: EditorConfig) -> Self {
        let document = DocumentTree::with_tip();
        let mut history = History::new(config.history_limit);
        history.reset(&document.serialized_state());
        let mut session = Self {
            document,
            history,
            caret: None,
            title: String::new(),
            config,
            revision: 0,
            export_busy: false,
            status: None,
            controls: Controls::default(),
        };
        session.sync_controls();
        session
    }

    /// Record a snapshot of the current document. Returns false when the
    /// state is identical to the snapshot under the cursor.
    pub fn snapshot(&mut self) -> bool {
        self.history.record(&self.document.serialized_state())
    }

    /// Restore the previous snapshot. Boundary hits are silent no-ops.
    pub fn undo(&mut self) -> bool {
        let state = match self.history.undo() {
            Some(snapshot) => snapshot.as_str().to_string(),
            None => return false,
        };
        self.bump_revision();
        self.restore(&state);
        true
    }

    /// Restore the next snapshot. Boundary hits are silent no-ops.
    pub fn redo(&mut self) -> bool {
        let state = match self.history.redo() {
            Some(snapshot) => snapshot.as_str().to_string(),
            None => return false,
        };
        self.bump_revision();
        self.restore(&state);
        true
    }

    /// Whether undo is available (for UI enablement)
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether redo is available (for UI enablement)
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Replace the document with the empty-state placeholder, clear the
    /// title, and re-seed the history from the new state.
    pub fn reset(&mut self) {
        self.bump_revision();
        self.document = DocumentTree::with_tip();
        self.title.clear();
        self.caret = None;
        self.history.reset(&self.document.serialized_state());
        self.sync_controls();
    }

    /// Replace the document with a template skeleton (or the placeholder
    /// when `template` is None), snapshot, and put the caret at the end.
    pub fn apply_template(&mut self, template: Option<TemplateId>) {
        self.bump_revision();
        self.document.nodes.clear();
        match template {
            Some(t) => self.document.nodes.extend(template::assemble(t)),
            None => self.document.nodes.push(crate::component::create(NodeKind::Tip)),
        }
        self.snapshot();
        self.caret = caret::place_caret_at_end(&self.document, None);
        self.sync_controls();
    }

    /// Insert a component block through the caret controller and record
    /// the checkpoint snapshot.
    pub fn insert_component(&mut self, node: Node) {
        self.bump_revision();
        let new_caret = caret::insert_at_caret(&mut self.document, self.caret.as_ref(), node);
        self.caret = Some(new_caret);
        self.snapshot();
        self.sync_controls();
    }

    /// Advance the edit revision, invalidating any pending debounced
    /// snapshot timers.
    pub fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Refresh the derived control states
    pub fn sync_controls(&mut self) {
        self.controls = Controls {
            undo_enabled: self.can_undo(),
            redo_enabled: self.can_redo(),
            export_enabled: !self.export_busy,
        };
    }

    fn restore(&mut self, state: &str) {
        match DocumentTree::from_serialized(state) {
            Ok(tree) => {
                self.document = tree;
                self.sanitize_after_restore();
            }
            Err(e) => {
                // Snapshots are produced by serialized_state, so this
                // only fires on a corrupted log; skip rather than crash.
                tracing::warn!("discarding unreadable snapshot: {}", e);
            }
        }
        self.sync_controls();
    }

    /// Post-restore sanitation: strip tip blocks, re-assert editability
    /// from each node's kind, and place the caret at the document end.
    pub fn sanitize_after_restore(&mut self) {
        self.document.remove_tips();
        self.document
            .for_each_mut(&mut |node| node.editable = node.kind.is_editable());
        self.caret = caret::place_caret_at_end(&self.document, None);
    }
}
