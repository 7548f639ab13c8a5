//! Terminal frontend for Gomoku
//!
//! A thin shell over [`gomoku_app::RenderBackend`] and
//! [`gomoku_app::MenuBackend`] that provides terminal-specific I/O. All
//! orchestration lives in [`gomoku_app::App::run`].
//!
//! The terminal stands in for the window: drawing happens in window units and
//! [`Canvas`] scales it onto the character grid.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod canvas;
pub mod setup;
pub mod terminal;

pub use canvas::Canvas;
pub use setup::{MENU_BUTTONS, build_app};
pub use terminal::{TerminalBackend, TerminalError};
