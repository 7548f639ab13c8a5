//! Pluggable player strategies.
//!
//! Only identity lives here. Move selection for humans and AIs is supplied
//! by whoever drives the session.

use std::fmt;

/// Who controls a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    /// Moves come from user input.
    Human,
    /// Moves come from an engine.
    Ai,
}

/// A participant in a game session.
pub trait Player: fmt::Debug {
    /// Controller of this player.
    fn kind(&self) -> PlayerKind;

    /// Display name.
    fn name(&self) -> &str;
}

/// Player driven by user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Human with the default name.
    pub fn new() -> Self {
        Self::named("Human")
    }

    /// Human with a custom name.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for HumanPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for HumanPlayer {
    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Player driven by an engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiPlayer {
    name: String,
}

impl AiPlayer {
    /// AI with the default name.
    pub fn new() -> Self {
        Self::named("AI")
    }

    /// AI with a custom name.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn kind(&self) -> PlayerKind {
        PlayerKind::Ai
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Position of a player in the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// First-assigned player. Plays black.
    First,
    /// Second-assigned player.
    Second,
}
