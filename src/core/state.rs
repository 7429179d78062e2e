//! Game state for a shootout.
//!
//! `GameState` is a small `Copy` value. Transitions never mutate it field
//! by field from the outside: the rules build a new value and the store
//! swaps it in whole.

use serde::{Deserialize, Serialize};

/// Whether the game still accepts turns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Turns are accepted.
    #[default]
    Playing,
    /// Terminal. Only a reset leaves this phase.
    Ended,
}

/// Result of a single shot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Goal.
    Success,
    /// Miss.
    Failure,
}

impl Outcome {
    /// Whether this shot scores.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Map a coin flip onto an outcome (`true` = goal).
    #[must_use]
    pub const fn from_bool(success: bool) -> Self {
        if success {
            Outcome::Success
        } else {
            Outcome::Failure
        }
    }
}

/// The two parties of a shootout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human player.
    Player,
    /// The automated opponent.
    Opponent,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Opponent => write!(f, "Computer"),
        }
    }
}

/// Complete state of one shootout.
///
/// ## Invariants
///
/// - `current_round` starts at 1 and only grows when the opponent shoots.
/// - `phase` is `Ended` exactly when `current_round` exceeds the round limit.
/// - `awaiting_opponent_turn` is never true once the game has ended.
/// - `last_outcome` is only cleared by a reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Goals scored by the player.
    pub player_score: u32,

    /// Goals scored by the opponent.
    pub opponent_score: u32,

    /// 1-indexed round counter.
    pub current_round: u32,

    /// Playing or ended.
    pub phase: Phase,

    /// Most recently resolved shot, for display.
    pub last_outcome: Option<Outcome>,

    /// The player has shot this round and the opponent has not.
    pub awaiting_opponent_turn: bool,
}

impl GameState {
    /// The state every game starts from, and every reset returns to.
    pub const INITIAL: GameState = GameState {
        player_score: 0,
        opponent_score: 0,
        current_round: 1,
        phase: Phase::Playing,
        last_outcome: None,
        awaiting_opponent_turn: false,
    };

    /// Create the initial state.
    #[must_use]
    pub const fn new() -> Self {
        Self::INITIAL
    }

    /// Score for one side.
    #[must_use]
    pub const fn score(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player_score,
            Side::Opponent => self.opponent_score,
        }
    }

    /// Whether the game is over.
    #[must_use]
    pub const fn is_ended(&self) -> bool {
        matches!(self.phase, Phase::Ended)
    }

    /// Whose shot is next, or `None` once the game ended.
    #[must_use]
    pub const fn next_to_shoot(&self) -> Option<Side> {
        match (self.phase, self.awaiting_opponent_turn) {
            (Phase::Ended, _) => None,
            (Phase::Playing, true) => Some(Side::Opponent),
            (Phase::Playing, false) => Some(Side::Player),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::INITIAL
    }
}
