//! State store: the single owner of the game state.

mod game_store;

pub use game_store::GameStore;
