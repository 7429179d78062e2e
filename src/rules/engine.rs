//! Shootout rules: the transition function and the winner query.
//!
//! `ShootoutRules::apply` is a pure function from (state, command, one
//! draw) to the next state. Commands issued at the wrong time return the
//! state unchanged; that is how the game rejects them.

use serde::{Deserialize, Serialize};

use crate::core::command::Command;
use crate::core::config::{ShootoutConfig, ROUND_LIMIT};
use crate::core::rng::OutcomeSource;
use crate::core::state::{GameState, Outcome, Phase, Side};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// One side scored more goals.
    Winner(Side),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Compare two final scores.
    #[must_use]
    pub fn from_scores(player_score: u32, opponent_score: u32) -> Self {
        use std::cmp::Ordering;

        match player_score.cmp(&opponent_score) {
            Ordering::Greater => GameResult::Winner(Side::Player),
            Ordering::Less => GameResult::Winner(Side::Opponent),
            Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(side) => write!(f, "{side} Wins!"),
            GameResult::Draw => write!(f, "It's a Tie!"),
        }
    }
}

/// Rules of a shootout with a fixed number of rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShootoutRules {
    round_limit: u32,
}

impl Default for ShootoutRules {
    fn default() -> Self {
        Self::new(ROUND_LIMIT)
    }
}

impl ShootoutRules {
    /// Create rules for `round_limit` rounds.
    #[must_use]
    pub fn new(round_limit: u32) -> Self {
        assert!(round_limit > 0, "Round limit must be at least 1");
        Self { round_limit }
    }

    /// Create rules from a (validated) configuration.
    #[must_use]
    pub fn from_config(config: &ShootoutConfig) -> Self {
        Self::new(config.round_limit)
    }

    /// Rounds per game.
    #[must_use]
    pub fn round_limit(&self) -> u32 {
        self.round_limit
    }

    /// The state a game starts from.
    #[must_use]
    pub fn initial_state(&self) -> GameState {
        GameState::INITIAL
    }

    /// Whether `command` would change `state`.
    #[must_use]
    pub fn accepts(&self, state: &GameState, command: Command) -> bool {
        match command {
            Command::PlayerTurn => state.phase == Phase::Playing && !state.awaiting_opponent_turn,
            Command::OpponentTurn => state.phase == Phase::Playing && state.awaiting_opponent_turn,
            Command::Reset => true,
        }
    }

    /// Compute the state that follows `command`.
    ///
    /// Draws exactly one outcome for an accepted turn and none otherwise.
    pub fn apply<S>(&self, state: &GameState, command: Command, source: &mut S) -> GameState
    where
        S: OutcomeSource + ?Sized,
    {
        if !self.accepts(state, command) {
            return *state;
        }

        match command {
            Command::PlayerTurn => self.resolve_player_turn(state, source.next_outcome()),
            Command::OpponentTurn => self.resolve_opponent_turn(state, source.next_outcome()),
            Command::Reset => self.initial_state(),
        }
    }

    /// Apply a player shot with a known outcome.
    ///
    /// Returns `state` unchanged if the player may not shoot.
    #[must_use]
    pub fn resolve_player_turn(&self, state: &GameState, outcome: Outcome) -> GameState {
        if !self.accepts(state, Command::PlayerTurn) {
            return *state;
        }

        GameState {
            player_score: state.player_score + u32::from(outcome.is_success()),
            last_outcome: Some(outcome),
            awaiting_opponent_turn: true,
            ..*state
        }
    }

    /// Apply an opponent shot with a known outcome, closing the round.
    ///
    /// Returns `state` unchanged if the opponent is not due.
    #[must_use]
    pub fn resolve_opponent_turn(&self, state: &GameState, outcome: Outcome) -> GameState {
        if !self.accepts(state, Command::OpponentTurn) {
            return *state;
        }

        let next_round = state.current_round + 1;
        let phase = if next_round > self.round_limit {
            Phase::Ended
        } else {
            Phase::Playing
        };

        GameState {
            opponent_score: state.opponent_score + u32::from(outcome.is_success()),
            current_round: next_round,
            phase,
            last_outcome: Some(outcome),
            awaiting_opponent_turn: false,
            ..*state
        }
    }

    /// Current standing, regardless of phase.
    #[must_use]
    pub fn standing(&self, state: &GameState) -> GameResult {
        GameResult::from_scores(state.player_score, state.opponent_score)
    }

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` once the game has ended, `None` while it continues.
    #[must_use]
    pub fn result(&self, state: &GameState) -> Option<GameResult> {
        state.is_ended().then(|| self.standing(state))
    }
}
