//! Outcomes of handling an input event.
//!
//! [`AppAction`]s are produced by [`crate::App::handle`]. The frame loop logs
//! them and stops on [`AppAction::Quit`]; tests assert on them.

use crate::{CellState, Coordinate};

/// Observable result of one input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Quit the application.
    Quit,

    /// Menu overlay became visible and took over input.
    OverlayOpened,

    /// Menu overlay was hidden and the board accepts input again.
    OverlayClosed,

    /// A menu button was activated.
    ButtonPressed {
        /// Button label.
        name: String,
    },

    /// A new game session replaced the previous one.
    GameStarted,

    /// A stone was placed on the board.
    StonePlaced {
        /// Board cell.
        cell: Coordinate,
        /// Colour placed.
        stone: CellState,
    },
}
