//! Platform-agnostic key events.
//!
//! Front ends map their native keyboard input to these enums. The terminal
//! core never sees raw platform input.

use serde::{Deserialize, Serialize};

/// A key event delivered to the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// Character typed into the input line.
    Char(char),
    /// Backspace / delete-left.
    Backspace,
    /// Replace the whole input line (paste, or a front end that edits
    /// the buffer itself and reports the result).
    Replace(String),
    /// A named key.
    Key(Key),
}

/// Named keys the terminal reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Submit the input line.
    Enter,
    /// Autocomplete / cycle completions.
    Tab,
    /// Recall an older command.
    Up,
    /// Recall a newer command.
    Down,
    /// Dismiss suggestions and leave tab-cycle mode.
    Escape,
    /// Ctrl+T: switch to the next theme.
    CycleTheme,
}

impl KeyEvent {
    /// Whether this event edits the input text (and so must end any
    /// in-progress tab cycle).
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            KeyEvent::Char(_) | KeyEvent::Backspace | KeyEvent::Replace(_)
        )
    }
}
