//! Core types: game state, commands, outcome sources, configuration.
//!
//! Everything here is plain data or a small capability trait. The rules
//! that move a `GameState` forward live in `rules`.

pub mod command;
pub mod config;
pub mod rng;
pub mod state;

pub use command::Command;
pub use config::{ConfigError, ShootoutConfig, ANIMATION_DELAY, ROUND_LIMIT};
pub use rng::{GameRng, OutcomeSource, ScriptedOutcomes};
pub use state::{GameState, Outcome, Phase, Side};
