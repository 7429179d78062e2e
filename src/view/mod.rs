//! Presentation queries for front ends.
//!
//! Rendering itself lives outside this crate. What lives here are the
//! conditionals a front end would otherwise recompute: which caption the
//! kick control shows, what the round indicator reads, who won.

mod scoreboard;

pub use scoreboard::{
    kick_button, result_banner, round_indicator, KickButton, RoundIndicator, Scoreboard,
};
