//! Error types.
//!
//! Every error here is a precondition violation raised at the boundary of the
//! operation that violated it. None are retried internally.

use thiserror::Error;

use crate::{AppPhase, Coordinate};

/// Invalid configuration value.
///
/// Raised while configuring, before any backend resource is acquired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A coordinate component was negative.
    #[error("coordinate components must be non-negative, got ({x}, {y})")]
    NegativeCoordinate {
        /// Rejected horizontal component.
        x: i32,
        /// Rejected vertical component.
        y: i32,
    },

    /// Window size with a zero axis.
    #[error("window size must be positive, got {width}x{height}")]
    EmptyWindow {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// Board size with a zero axis.
    #[error("board size must be positive, got {width}x{height}")]
    EmptyBoard {
        /// Requested columns.
        width: u32,
        /// Requested rows.
        height: u32,
    },

    /// Board with more cells than the window has units.
    #[error("board of {width}x{height} cells does not fit the window")]
    BoardTooLarge {
        /// Requested columns.
        width: u32,
        /// Requested rows.
        height: u32,
    },

    /// A menu button was given an empty name.
    #[error("button name must not be empty")]
    EmptyButtonName,
}

/// Menu interaction attempted before the menu instance was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("menu instance has not been built")]
pub struct InstanceNotBuiltError;

/// Players were already assigned on this game.
///
/// The game is left unchanged. Obtain a fresh game to assign again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("players already set")]
pub struct PlayerAlreadySetError;

/// Stone placement rejected by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// Cell lies outside the grid.
    #[error("cell {cell} is outside the board")]
    OutOfBounds {
        /// Rejected cell.
        cell: Coordinate,
    },

    /// Cell already holds a stone.
    #[error("cell {cell} is already occupied")]
    Occupied {
        /// Rejected cell.
        cell: Coordinate,
    },
}

/// Failure while running the app or a modal menu.
#[derive(Debug, Error)]
pub enum RunError<E>
where
    E: std::error::Error + 'static,
{
    /// The backend failed.
    #[error("backend error: {0}")]
    Backend(#[source] E),

    /// Menu used before its instance was built.
    #[error(transparent)]
    MenuNotBuilt(#[from] InstanceNotBuiltError),

    /// `run` called outside the `Configuring` phase.
    #[error("app cannot run from the {0:?} phase")]
    InvalidPhase(AppPhase),
}
