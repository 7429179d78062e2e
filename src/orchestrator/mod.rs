//! Turn orchestration over a single-threaded timer queue.
//!
//! - `timer`: virtual-time queue of cancellable deferred tasks
//! - `turns`: `TurnOrchestrator`, which issues the opponent's shot after a
//!   delay and debounces the player's kick

pub mod timer;
pub mod turns;

pub use timer::{TimerId, TimerQueue};
pub use turns::TurnOrchestrator;
