//! Shootout rules.
//!
//! `ShootoutRules` defines:
//! - When each command is accepted
//! - How an accepted command (plus one drawn outcome) changes the state
//! - Who won once the game is over
//!
//! The rules never hold state themselves; the store owns it.

pub mod engine;

pub use engine::{GameResult, ShootoutRules};
