//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an
//! update. The host (CLI, UI shell, test harness) executes them and
//! feeds any results back in as messages.

use crate::export::ExportJob;

/// Commands returned by update functions
#[derive(Debug, Clone, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the UI
    Redraw,
    /// Start (or restart) the typing debounce timer.
    /// After delay_ms the host sends `HistoryMsg::SnapshotReady` carrying
    /// this revision; the update drops it if the document has moved on.
    ScheduleSnapshot { revision: u64, delay_ms: u64 },
    /// Render the prepared print document to a PDF file.
    /// The host sends `ExportMsg::Completed` with the outcome.
    RenderPdf { job: ExportJob },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Timers and rendering trigger their own follow-up messages
            Cmd::ScheduleSnapshot { .. } => false,
            Cmd::RenderPdf { .. } => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }
}

// Allow converting Option<Cmd> to Cmd
impl From<Option<Cmd>> for Cmd {
    fn from(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}
