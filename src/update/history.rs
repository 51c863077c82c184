//! History update functions: snapshot capture and undo/redo

use crate::commands::Cmd;
use crate::messages::HistoryMsg;
use crate::model::EditorSession;

/// Handle history messages
pub fn update_history(session: &mut EditorSession, msg: HistoryMsg) -> Option<Cmd> {
    match msg {
        HistoryMsg::Snapshot => {
            session.snapshot();
            Some(Cmd::Redraw)
        }

        HistoryMsg::SnapshotReady { revision } => {
            // A debounce timer that outlived its edit burst. The revision
            // moves on every mutation (including undo/redo/reset), so a
            // stale timer can never fold a dead state into the log.
            if revision != session.revision {
                tracing::debug!(
                    "skipping stale snapshot timer: rev {} != current {}",
                    revision,
                    session.revision
                );
                return None;
            }
            session.snapshot();
            Some(Cmd::Redraw)
        }

        HistoryMsg::Undo => {
            if session.undo() {
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        HistoryMsg::Redo => {
            if session.redo() {
                Some(Cmd::Redraw)
            } else {
                None
            }
        }
    }
}
