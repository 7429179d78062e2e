//! Commands accepted by the state store.

use serde::{Deserialize, Serialize};

/// A discrete request to move the game forward.
///
/// Commands carry no payload: the outcome of a shot is drawn by the store,
/// never supplied by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// The human player shoots.
    PlayerTurn,
    /// The automated opponent shoots. Issued only by the orchestrator.
    OpponentTurn,
    /// Discard the game and start over.
    Reset,
}

impl Command {
    /// All commands, in declaration order.
    pub const ALL: [Command; 3] = [Command::PlayerTurn, Command::OpponentTurn, Command::Reset];
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Command::PlayerTurn => "player_turn",
            Command::OpponentTurn => "opponent_turn",
            Command::Reset => "reset",
        };
        f.write_str(name)
    }
}
