//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use folio::commands::Cmd;
use folio::messages::{HistoryMsg, Msg};
use folio::model::EditorSession;
use folio::update::update;
use folio::EditorConfig;

/// Create a session with default configuration
pub fn test_session() -> EditorSession {
    EditorSession::new(EditorConfig::default())
}

/// Create a session with a specific history bound
pub fn test_session_with_limit(history_limit: usize) -> EditorSession {
    EditorSession::new(EditorConfig {
        history_limit,
        ..EditorConfig::default()
    })
}

/// Simulates the host's debounce timer: each new `ScheduleSnapshot`
/// cancels and replaces the pending one, and `fire` delivers the
/// trailing tick the way a real timer would after the burst pauses.
#[derive(Default)]
pub struct DebounceHost {
    pending: Option<u64>,
}

impl DebounceHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe a command returned by update; a fresh schedule replaces
    /// (cancels) any pending timer.
    pub fn observe(&mut self, cmd: &Option<Cmd>) {
        if let Some(Cmd::ScheduleSnapshot { revision, .. }) = cmd {
            self.pending = Some(*revision);
        }
    }

    /// Whether a timer is armed
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Fire the pending timer into the session, if armed
    pub fn fire(&mut self, session: &mut EditorSession) -> Option<Cmd> {
        let revision = self.pending.take()?;
        update(session, Msg::History(HistoryMsg::SnapshotReady { revision }))
    }
}
