//! Deterministic simulation harness for the Gomoku shell.
//!
//! [`SimBackend`] implements the backend traits without a window: input is
//! scripted per tick, every draw call is recorded and time advances on a
//! virtual clock. The same [`gomoku_app::App::run`] loop used by the terminal
//! frontend runs unchanged against it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod sim_backend;

pub use sim_backend::{DrawCall, SimBackend, SimBackendError};
