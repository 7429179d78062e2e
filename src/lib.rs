//! # penalty-shootout
//!
//! A turn-based penalty shootout: a human player and an automated opponent
//! alternate shots for a fixed number of rounds, each shot a 50/50 goal or
//! miss.
//!
//! ## Design Principles
//!
//! 1. **One Owner**: `GameStore` holds the only authoritative `GameState`
//!    and replaces it whole on every accepted command.
//!
//! 2. **Silent Rejection**: commands issued at the wrong time return the
//!    state unchanged. There is no error path in gameplay.
//!
//! 3. **Injected Randomness**: every draw goes through `OutcomeSource`, so
//!    a test can script an entire game.
//!
//! ## Architecture
//!
//! - **State Store**: pure transitions (`ShootoutRules`) applied by an
//!   owning container (`GameStore`).
//!
//! - **Turn Orchestrator**: issues the opponent's shot after a delay and
//!   debounces the player's kick, on a single-threaded virtual-time
//!   `TimerQueue`. Pending timers are cancelled on every state change, so a
//!   reset always wins over a stale opponent shot.
//!
//! ## Modules
//!
//! - `core`: Game state, commands, outcome sources, configuration
//! - `rules`: Transition function and winner query
//! - `store`: The state container
//! - `orchestrator`: Timer queue and turn pacing
//! - `view`: Stateless presentation queries
//!
//! ## Example
//!
//! ```
//! use penalty_shootout::core::{Outcome, ScriptedOutcomes};
//! use penalty_shootout::{GameStore, ShootoutRules, TurnOrchestrator};
//!
//! let source = ScriptedOutcomes::new([Outcome::Success, Outcome::Failure]).unwrap();
//! let mut game = TurnOrchestrator::new(GameStore::new(ShootoutRules::default(), source));
//!
//! while !game.state().is_ended() {
//!     game.request_player_turn();
//!     game.run_until_idle();
//! }
//!
//! assert_eq!(game.state().player_score, 5);
//! assert_eq!(game.scoreboard().winner_text().as_deref(), Some("Player Wins!"));
//! ```

pub mod core;
pub mod orchestrator;
pub mod rules;
pub mod store;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    Command, ConfigError, GameRng, GameState, Outcome, OutcomeSource, Phase, ScriptedOutcomes,
    ShootoutConfig, Side, ANIMATION_DELAY, ROUND_LIMIT,
};

pub use crate::rules::{GameResult, ShootoutRules};

pub use crate::store::GameStore;

pub use crate::orchestrator::{TimerId, TimerQueue, TurnOrchestrator};

pub use crate::view::{KickButton, RoundIndicator, Scoreboard};
