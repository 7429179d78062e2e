//! Shootout configuration.
//!
//! The two tunables of the game are exposed as named constants and
//! collected into `ShootoutConfig`, which callers can override with the
//! `with_*` builders.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rounds per game.
pub const ROUND_LIMIT: u32 = 5;

/// Pause before the opponent shoots, and how long a result stays on screen.
pub const ANIMATION_DELAY: Duration = Duration::from_millis(1500);

/// Invalid configuration values.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("round limit must be at least 1")]
    ZeroRoundLimit,

    #[error("round limit {0} is too large")]
    RoundLimitTooLarge(u32),
}

/// Shootout configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShootoutConfig {
    /// Number of rounds before the game ends (default: 5).
    pub round_limit: u32,

    /// Delay between the player's shot and the opponent's.
    pub opponent_delay: Duration,

    /// How long the player's shot animates before the kick control
    /// becomes available again.
    pub result_display_delay: Duration,

    /// Seed for the outcome RNG. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for ShootoutConfig {
    fn default() -> Self {
        Self {
            round_limit: ROUND_LIMIT,
            opponent_delay: ANIMATION_DELAY,
            result_display_delay: ANIMATION_DELAY,
            seed: None,
        }
    }
}

impl ShootoutConfig {
    /// Set the number of rounds.
    pub fn with_round_limit(mut self, rounds: u32) -> Self {
        self.round_limit = rounds;
        self
    }

    /// Set both the opponent delay and the result display delay.
    pub fn with_animation_delay(mut self, delay: Duration) -> Self {
        self.opponent_delay = delay;
        self.result_display_delay = delay;
        self
    }

    /// Set the opponent delay only.
    pub fn with_opponent_delay(mut self, delay: Duration) -> Self {
        self.opponent_delay = delay;
        self
    }

    /// Set the result display delay only.
    pub fn with_result_display_delay(mut self, delay: Duration) -> Self {
        self.result_display_delay = delay;
        self
    }

    /// Use a fixed RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration for values the state machine cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.round_limit == 0 {
            return Err(ConfigError::ZeroRoundLimit);
        }
        // The round counter runs to round_limit + 1.
        if self.round_limit == u32::MAX {
            return Err(ConfigError::RoundLimitTooLarge(self.round_limit));
        }
        Ok(())
    }
}
