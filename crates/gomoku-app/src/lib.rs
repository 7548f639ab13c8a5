//! Application shell for Gomoku
//!
//! Pure state machines for the windowed shell, its menu overlay and the game
//! session, plus the frame loop that drives them through a pluggable backend.
//! Nothing in this crate performs I/O: frontends implement [`RenderBackend`]
//! and [`MenuBackend`], so the same loop runs against a terminal and against
//! the deterministic simulation used in tests.
//!
//! # Components
//!
//! - [`AppBuilder`] / [`App`]: window, overlay state machine and frame loop
//! - [`MenuBuilder`] / [`Menu`]: buttons, theme and the renderable
//!   [`MenuInstance`]
//! - [`GameBuilder`] / [`Game`]: players, time budgets and turn counter
//! - [`Board`] / [`Grid`] / [`BoardLayout`]: stones and cell geometry

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod backend;
mod board;
mod button;
pub mod constants;
mod coordinate;
mod error;
mod game;
mod grid;
mod input;
mod layout;
mod menu;
mod player;
mod runtime;

pub use action::AppAction;
pub use app::{App, AppBuilder, AppPhase};
pub use backend::{Color, MenuBackend, RenderBackend, SurfaceHandle};
pub use board::Board;
pub use button::{Button, ButtonAction, ButtonContext, ButtonHandler};
pub use coordinate::Coordinate;
pub use error::{
    InstanceNotBuiltError, PlacementError, PlayerAlreadySetError, RunError, ValidationError,
};
pub use game::{Game, GameBuilder};
pub use grid::{CellState, Grid};
pub use input::{InputEvent, Key};
pub use layout::{BoardLayout, Rect};
pub use menu::{Menu, MenuBuilder, MenuInstance, MenuOutcome, MenuSelection, Theme};
pub use player::{AiPlayer, HumanPlayer, Player, PlayerKind, Seat};
