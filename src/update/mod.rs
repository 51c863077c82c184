//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod document;
mod export;
mod history;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::EditorSession;

pub use document::update_document;
pub use export::update_export;
pub use history::update_history;

/// Main update function - dispatches to sub-handlers
///
/// Derived control states (undo/redo/export enablement) are refreshed
/// after every message, whatever the handler did.
pub fn update(session: &mut EditorSession, msg: Msg) -> Option<Cmd> {
    let result = match msg {
        Msg::Document(m) => document::update_document(session, m),
        Msg::History(m) => history::update_history(session, m),
        Msg::Export(m) => export::update_export(session, m),
    };

    session.sync_controls();
    result
}
