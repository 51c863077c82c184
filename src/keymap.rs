//! Keyboard shortcut mapping for the editor trigger surface.
//!
//! The host UI translates its raw key events into [`Keystroke`] values
//! and asks the keymap which editor command, if any, they trigger.

use crate::messages::{ExportMsg, HistoryMsg, Msg};

/// Modifier keys as a bitfield for efficient storage and comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b0001);
    pub const SHIFT: Modifiers = Modifiers(0b0010);
    pub const ALT: Modifiers = Modifiers(0b0100);
    pub const META: Modifiers = Modifiers(0b1000); // Cmd on macOS, Win on Windows

    /// Create modifiers from individual flags
    pub const fn new(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0u8;
        if ctrl {
            bits |= 0b0001;
        }
        if shift {
            bits |= 0b0010;
        }
        if alt {
            bits |= 0b0100;
        }
        if meta {
            bits |= 0b1000;
        }
        Modifiers(bits)
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    /// Get the platform "command" modifier (Cmd on macOS, Ctrl elsewhere)
    pub fn cmd() -> Modifiers {
        if cfg!(target_os = "macos") {
            Modifiers::META
        } else {
            Modifiers::CTRL
        }
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

/// A key code for the keys the editor binds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key (normalized to lowercase)
    Char(char),
    Enter,
}

/// A single keystroke: key plus held modifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Keystroke {
    pub code: KeyCode,
    pub mods: Modifiers,
}

impl Keystroke {
    pub const fn new(code: KeyCode, mods: Modifiers) -> Self {
        Self { code, mods }
    }
}

/// Commands the trigger surface can fire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    Undo,
    Redo,
    ExportPdf,
}

impl EditorCommand {
    /// The message this command dispatches
    pub fn to_msg(self) -> Msg {
        match self {
            EditorCommand::Undo => Msg::History(HistoryMsg::Undo),
            EditorCommand::Redo => Msg::History(HistoryMsg::Redo),
            EditorCommand::ExportPdf => Msg::Export(ExportMsg::Requested),
        }
    }
}

/// Keystroke-to-command map with exact modifier matching
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(Keystroke, EditorCommand)>,
}

impl Keymap {
    /// The built-in bindings:
    /// mod+Z undo, mod+Y and mod+Shift+Z redo, mod+Enter export
    pub fn with_defaults() -> Self {
        let cmd = Modifiers::cmd();
        Self {
            bindings: vec![
                (
                    Keystroke::new(KeyCode::Char('z'), cmd),
                    EditorCommand::Undo,
                ),
                (
                    Keystroke::new(KeyCode::Char('y'), cmd),
                    EditorCommand::Redo,
                ),
                (
                    Keystroke::new(KeyCode::Char('z'), cmd | Modifiers::SHIFT),
                    EditorCommand::Redo,
                ),
                (Keystroke::new(KeyCode::Enter, cmd), EditorCommand::ExportPdf),
            ],
        }
    }

    /// Look up the command bound to a keystroke, if any.
    /// Modifiers match exactly, so mod+Shift+Z never falls through to the
    /// plain mod+Z undo binding.
    pub fn lookup(&self, keystroke: &Keystroke) -> Option<EditorCommand> {
        self.bindings
            .iter()
            .find(|(stroke, _)| stroke == keystroke)
            .map(|(_, cmd)| *cmd)
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroke(ch: char, mods: Modifiers) -> Keystroke {
        Keystroke::new(KeyCode::Char(ch), mods)
    }

    #[test]
    fn test_undo_redo_bindings() {
        let keymap = Keymap::with_defaults();
        let cmd = Modifiers::cmd();

        assert_eq!(keymap.lookup(&stroke('z', cmd)), Some(EditorCommand::Undo));
        assert_eq!(keymap.lookup(&stroke('y', cmd)), Some(EditorCommand::Redo));
        assert_eq!(
            keymap.lookup(&stroke('z', cmd | Modifiers::SHIFT)),
            Some(EditorCommand::Redo)
        );
    }

    #[test]
    fn test_export_binding() {
        let keymap = Keymap::with_defaults();
        let enter = Keystroke::new(KeyCode::Enter, Modifiers::cmd());
        assert_eq!(keymap.lookup(&enter), Some(EditorCommand::ExportPdf));
    }

    #[test]
    fn test_unmodified_keys_are_unbound() {
        let keymap = Keymap::with_defaults();
        assert_eq!(keymap.lookup(&stroke('z', Modifiers::NONE)), None);
        assert_eq!(
            keymap.lookup(&Keystroke::new(KeyCode::Enter, Modifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_shift_z_does_not_match_undo() {
        let keymap = Keymap::with_defaults();
        let shifted = stroke('z', Modifiers::cmd() | Modifiers::SHIFT);
        assert_ne!(keymap.lookup(&shifted), Some(EditorCommand::Undo));
    }
}
