//! Derived presentation state.
//!
//! Every query here is a pure function of a `GameState` (plus the
//! orchestrator's animation flag). Nothing is stored, so the view can never
//! disagree with the game.

use serde::Serialize;

use crate::core::state::{GameState, Outcome, Side};
use crate::rules::{GameResult, ShootoutRules};

/// State of the kick control while the game is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum KickButton {
    /// The player may shoot.
    Ready,
    /// Waiting for the opponent's shot.
    OpponentShooting,
    /// The player's shot is still animating.
    BallInMotion,
}

impl KickButton {
    /// Button caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            KickButton::Ready => "KICK!",
            KickButton::OpponentShooting => "COMPUTER KICKING...",
            KickButton::BallInMotion => "BALL IN MOTION...",
        }
    }

    /// Whether pressing the button does anything.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, KickButton::Ready)
    }
}

/// Kick control for `state`, or `None` once the game is over.
#[must_use]
pub fn kick_button(state: &GameState, animating: bool) -> Option<KickButton> {
    match state.next_to_shoot()? {
        Side::Opponent => Some(KickButton::OpponentShooting),
        Side::Player if animating => Some(KickButton::BallInMotion),
        Side::Player => Some(KickButton::Ready),
    }
}

/// Round counter as shown between the two scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum RoundIndicator {
    /// Game in progress.
    Round { current: u32, limit: u32 },
    /// Game over.
    Final,
}

impl std::fmt::Display for RoundIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundIndicator::Round { current, limit } => write!(f, "ROUND {current}/{limit}"),
            RoundIndicator::Final => write!(f, "FINAL: GAME OVER"),
        }
    }
}

/// Round indicator for `state`.
#[must_use]
pub fn round_indicator(state: &GameState, round_limit: u32) -> RoundIndicator {
    if state.is_ended() {
        RoundIndicator::Final
    } else {
        RoundIndicator::Round {
            current: state.current_round,
            limit: round_limit,
        }
    }
}

/// Overlay text for the last resolved shot.
#[must_use]
pub fn result_banner(last_outcome: Option<Outcome>) -> Option<&'static str> {
    last_outcome.map(|outcome| match outcome {
        Outcome::Success => "GOAL!",
        Outcome::Failure => "MISSED!",
    })
}

/// Everything a front end needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    pub player_score: u32,
    pub opponent_score: u32,
    pub round: RoundIndicator,
    /// `None` once the game is over; the reset control replaces it.
    pub kick_button: Option<KickButton>,
    pub banner: Option<&'static str>,
    /// Set once the game is over.
    pub result: Option<GameResult>,
}

impl Scoreboard {
    /// Derive the scoreboard for `state`.
    #[must_use]
    pub fn new(rules: &ShootoutRules, state: &GameState, animating: bool) -> Self {
        Self {
            player_score: state.player_score,
            opponent_score: state.opponent_score,
            round: round_indicator(state, rules.round_limit()),
            kick_button: kick_button(state, animating),
            banner: result_banner(state.last_outcome),
            result: rules.result(state),
        }
    }

    /// "Player Wins!", "Computer Wins!" or "It's a Tie!" once the game is over.
    #[must_use]
    pub fn winner_text(&self) -> Option<String> {
        self.result.map(|result| result.to_string())
    }

    /// "Final Score: 3 - 2" once the game is over.
    #[must_use]
    pub fn final_score(&self) -> Option<String> {
        self.result
            .map(|_| format!("Final Score: {} - {}", self.player_score, self.opponent_score))
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "PLAYER {}  |  {}  |  COMPUTER {}",
            self.player_score, self.round, self.opponent_score
        )?;
        if let Some(banner) = self.banner {
            writeln!(f, "{banner}")?;
        }
        match (self.kick_button, self.winner_text(), self.final_score()) {
            (Some(button), _, _) => write!(f, "[{}]", button.label()),
            (None, Some(winner), Some(score)) => write!(f, "{winner}  {score}  [PLAY AGAIN]"),
            _ => Ok(()),
        }
    }
}
