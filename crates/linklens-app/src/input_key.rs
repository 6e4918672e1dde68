//! Abstract input key event, independent of terminal library.
//!
//! Keeps linklens-app free of crossterm types; the TUI converts
//! `crossterm::event::KeyEvent` into [`InputKey`] at its boundary.

/// Abstract input key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+u, Ctrl+c, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab (BackTab)
    BackTab,
    Backspace,
    Delete,
}

impl InputKey {
    /// True for the global quit chord
    pub fn is_force_quit(&self) -> bool {
        matches!(self, InputKey::CharCtrl('c'))
    }
}
