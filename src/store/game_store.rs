//! The authoritative state container.

use tracing::{debug, info};

use crate::core::command::Command;
use crate::core::config::{ConfigError, ShootoutConfig};
use crate::core::rng::{GameRng, OutcomeSource};
use crate::core::state::GameState;
use crate::rules::{GameResult, ShootoutRules};

/// Owns the current `GameState` and the outcome source.
///
/// Every accepted command replaces the state in one assignment. Rejected
/// commands leave it untouched and are only logged.
///
/// The opponent's command is crate-private: outside callers can shoot for
/// the player and reset, nothing more. `TurnOrchestrator` issues the
/// opponent's shot.
#[derive(Clone, Debug)]
pub struct GameStore<R = GameRng> {
    rules: ShootoutRules,
    state: GameState,
    source: R,
    revision: u64,
}

impl GameStore<GameRng> {
    /// Build a store from configuration.
    ///
    /// Uses the configured seed, or an OS-seeded RNG when none is set.
    pub fn from_config(config: &ShootoutConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!(seed = rng.seed(), rounds = config.round_limit, "new shootout");

        Ok(Self::new(ShootoutRules::from_config(config), rng))
    }
}

impl<R: OutcomeSource> GameStore<R> {
    /// Create a store holding the initial state.
    pub fn new(rules: ShootoutRules, source: R) -> Self {
        Self {
            rules,
            state: rules.initial_state(),
            source,
            revision: 0,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state
    }

    /// The rules this store applies.
    #[must_use]
    pub fn rules(&self) -> &ShootoutRules {
        &self.rules
    }

    /// Number of accepted commands so far.
    ///
    /// Changes on every accepted command, including a reset of a state that
    /// already equals the initial one.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether the player may shoot now.
    #[must_use]
    pub fn can_player_act(&self) -> bool {
        self.rules.accepts(&self.state, Command::PlayerTurn)
    }

    /// Final result, once the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.rules.result(&self.state)
    }

    /// The player shoots. Ignored unless it is the player's turn.
    pub fn player_turn(&mut self) -> &GameState {
        self.dispatch(Command::PlayerTurn)
    }

    /// Start over. Always accepted.
    pub fn reset(&mut self) -> &GameState {
        self.dispatch(Command::Reset)
    }

    /// The opponent shoots. Ignored unless the opponent is due.
    pub(crate) fn opponent_turn(&mut self) -> &GameState {
        self.dispatch(Command::OpponentTurn)
    }

    fn dispatch(&mut self, command: Command) -> &GameState {
        if !self.rules.accepts(&self.state, command) {
            debug!(%command, round = self.state.current_round, phase = ?self.state.phase, "command ignored");
            return &self.state;
        }

        let next = self.rules.apply(&self.state, command, &mut self.source);
        self.state = next;
        self.revision += 1;

        debug!(
            %command,
            outcome = ?next.last_outcome,
            player = next.player_score,
            opponent = next.opponent_score,
            round = next.current_round,
            "command applied"
        );
        if let (Command::OpponentTurn, Some(result)) = (command, self.rules.result(&next)) {
            info!(
                player = next.player_score,
                opponent = next.opponent_score,
                %result,
                "game over"
            );
        }

        &self.state
    }
}
