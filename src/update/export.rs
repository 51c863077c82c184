//! Export update functions: PDF request lifecycle and busy-state handling

use crate::commands::Cmd;
use crate::export;
use crate::messages::ExportMsg;
use crate::model::EditorSession;

/// Handle export messages
pub fn update_export(session: &mut EditorSession, msg: ExportMsg) -> Option<Cmd> {
    match msg {
        ExportMsg::Requested => {
            if session.export_busy {
                tracing::debug!("export already in flight, ignoring request");
                return None;
            }
            session.export_busy = true;
            session.status = Some("Preparing PDF...".to_string());
            let job = export::build_job(session);
            Some(Cmd::RenderPdf { job })
        }

        ExportMsg::Completed(result) => {
            // The trigger control comes back whatever happened to the
            // render; an export failure must never wedge the session.
            session.export_busy = false;
            match result {
                Ok(path) => {
                    session.status = Some(format!("Exported {}", path.display()));
                }
                Err(e) => {
                    tracing::warn!("PDF export failed: {}", e);
                    session.status = Some(format!("PDF export failed: {}", e));
                }
            }
            Some(Cmd::Redraw)
        }
    }
}
