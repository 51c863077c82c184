//! Folio - structured document editor core
//!
//! This crate provides the content model, snapshot history, and export
//! pipeline for a component-based document editor, implementing the Elm
//! Architecture pattern: an explicit session model, message enums, update
//! functions, and side-effect commands executed by the host.

pub mod caret;
pub mod commands;
pub mod component;
pub mod config;
pub mod config_paths;
pub mod export;
pub mod history;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod palette;
pub mod template;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::EditorSession;
pub use update::update;
