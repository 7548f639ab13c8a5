//! Turn and session lifecycle.
//!
//! A [`Game`] stores the two players, the seat to move, the time budgets and
//! the turn counter. Players are assigned exactly once. Switching seats,
//! spending budgets and detecting timeouts are left to the caller.

use std::time::Duration;

use rand::Rng;

use crate::{
    AiPlayer, HumanPlayer, Player, PlayerAlreadySetError, Seat,
    constants::{DEFAULT_GAME_TIME, DEFAULT_TURN_TIME},
};

/// Game session.
#[derive(Debug)]
pub struct Game {
    /// Both players. `None` until assigned.
    players: Option<(Box<dyn Player>, Box<dyn Player>)>,
    /// Seat to move. Meaningful only once players are assigned.
    current: Seat,
    /// Budget for a single turn.
    turn_time: Duration,
    /// Cumulative budget per player.
    game_time: Duration,
    /// Turns played so far. Never decreases.
    turn_count: u32,
}

impl Game {
    /// Game with default budgets and no players.
    pub fn new() -> Self {
        Self {
            players: None,
            current: Seat::First,
            turn_time: DEFAULT_TURN_TIME,
            game_time: DEFAULT_GAME_TIME,
            turn_count: 0,
        }
    }

    /// Override the per-turn budget.
    pub fn set_turn_time(&mut self, turn_time: Duration) {
        self.turn_time = turn_time;
    }

    /// Override the per-player game budget.
    pub fn set_game_time(&mut self, game_time: Duration) {
        self.game_time = game_time;
    }

    /// Assign both players. The first one moves first.
    ///
    /// # Errors
    ///
    /// [`PlayerAlreadySetError`] if players were assigned before. The game is
    /// not modified.
    pub fn set_players(
        &mut self,
        first: impl Player + 'static,
        second: impl Player + 'static,
    ) -> Result<(), PlayerAlreadySetError> {
        if self.players.is_some() {
            return Err(PlayerAlreadySetError);
        }
        tracing::debug!(first = first.name(), second = second.name(), "players assigned");
        self.players = Some((Box::new(first), Box::new(second)));
        self.current = Seat::First;
        Ok(())
    }

    /// `true` once players are assigned.
    pub fn has_players(&self) -> bool {
        self.players.is_some()
    }

    /// Player in `seat`. `None` before assignment.
    pub fn player(&self, seat: Seat) -> Option<&dyn Player> {
        self.players.as_ref().map(|(first, second)| match seat {
            Seat::First => first.as_ref(),
            Seat::Second => second.as_ref(),
        })
    }

    /// Seat to move. `None` before assignment.
    pub fn current_seat(&self) -> Option<Seat> {
        self.players.as_ref().map(|_| self.current)
    }

    /// Player to move. `None` before assignment.
    pub fn current_player(&self) -> Option<&dyn Player> {
        self.player(self.current)
    }

    /// Budget for a single turn.
    pub fn turn_time(&self) -> Duration {
        self.turn_time
    }

    /// Cumulative budget per player.
    pub fn game_time(&self) -> Duration {
        self.game_time
    }

    /// Turns played so far.
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Count one more turn.
    pub fn record_turn(&mut self) {
        self.turn_count = self.turn_count.saturating_add(1);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Game`].
///
/// Setters chain through `&mut Self`; the player setters are fallible since a
/// game accepts a single assignment.
#[derive(Debug, Default)]
pub struct GameBuilder {
    game: Game,
}

impl GameBuilder {
    /// Builder holding a fresh game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard everything configured so far.
    pub fn reset(&mut self) -> &mut Self {
        self.game = Game::new();
        self
    }

    /// Override the per-turn budget.
    pub fn set_turn_time(&mut self, turn_time: Duration) -> &mut Self {
        self.game.set_turn_time(turn_time);
        self
    }

    /// Override the per-player game budget.
    pub fn set_game_time(&mut self, game_time: Duration) -> &mut Self {
        self.game.set_game_time(game_time);
        self
    }

    /// Two human players.
    pub fn set_players_only_human(&mut self) -> Result<&mut Self, PlayerAlreadySetError> {
        self.game.set_players(HumanPlayer::named("Human 1"), HumanPlayer::named("Human 2"))?;
        Ok(self)
    }

    /// Two AI players.
    pub fn set_players_only_ai(&mut self) -> Result<&mut Self, PlayerAlreadySetError> {
        self.game.set_players(AiPlayer::named("AI 1"), AiPlayer::named("AI 2"))?;
        Ok(self)
    }

    /// One human and one AI, seats drawn from the thread RNG.
    pub fn set_players_mixed(&mut self) -> Result<&mut Self, PlayerAlreadySetError> {
        self.set_players_mixed_with(&mut rand::rng())
    }

    /// One human and one AI. The AI takes the first seat with probability
    /// one half, drawn from `rng`.
    pub fn set_players_mixed_with<R>(
        &mut self,
        rng: &mut R,
    ) -> Result<&mut Self, PlayerAlreadySetError>
    where
        R: Rng + ?Sized,
    {
        if rng.random_bool(0.5) {
            self.game.set_players(AiPlayer::new(), HumanPlayer::new())?;
        } else {
            self.game.set_players(HumanPlayer::new(), AiPlayer::new())?;
        }
        Ok(self)
    }

    /// Hand over the configured game and start over with a fresh one.
    pub fn build(&mut self) -> Game {
        std::mem::take(&mut self.game)
    }
}
