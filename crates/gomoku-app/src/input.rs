//! Backend-agnostic input events.

use crate::Coordinate;

/// Keyboard input abstraction.
///
/// Decouples the shell from terminal and windowing libraries so the frame
/// loop can be driven deterministically in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable character.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Escape key.
    Esc,
    /// Tab key.
    Tab,
    /// Backspace key.
    Backspace,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
}

/// One input event drained from the backend during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed or interrupt requested.
    Quit,

    /// Key pressed.
    KeyDown(Key),

    /// Primary button pressed at a point in window units.
    Click(Coordinate),

    /// Backend viewport resized, in backend units.
    ///
    /// Informational only: the window size is fixed for the app's lifetime.
    Resize(u32, u32),
}
