//! Terminal-independent key events
//!
//! The TUI converts crossterm key events into `InputKey` at its boundary so
//! that the app crate (and the headless runner) never depend on crossterm.

/// A key press, stripped of terminal-library details
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character
    Char(char),
    /// Character with Ctrl held (Ctrl+w arrives as `CharCtrl('w')`)
    CharCtrl(char),

    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
}
