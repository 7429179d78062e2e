//! Turn orchestrator: paces the opponent's shot and the kick control.

use std::time::Duration;

use tracing::{debug, trace};

use super::timer::{TimerId, TimerQueue};
use crate::core::config::{ConfigError, ShootoutConfig, ANIMATION_DELAY};
use crate::core::rng::{GameRng, OutcomeSource};
use crate::core::state::GameState;
use crate::rules::ShootoutRules;
use crate::store::GameStore;
use crate::view::Scoreboard;

/// Work deferred onto the timer queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Deferred {
    /// The opponent takes its shot.
    OpponentTurn,
    /// The player's shot has been on screen long enough.
    EndAnimation,
}

/// Drives a `GameStore` in real-world order.
///
/// The orchestrator decides *when* commands are issued, never what they do.
/// It owns the store, so it is the only thing that can issue the opponent's
/// shot.
///
/// ## Pacing
///
/// - A player kick is forwarded only when no earlier kick is still
///   animating. Repeated presses are dropped.
/// - Whenever the state changes, any pending opponent shot is cancelled
///   and, if the opponent is now due, rescheduled after `opponent_delay`.
///   A reset therefore always kills a stale opponent shot.
/// - While a kick animates and a result is showing, the animation timer is
///   re-armed for `result_display_delay`; when it fires the kick control
///   is released.
///
/// Time is virtual. Call `advance`/`advance_to` from a real clock, or
/// `run_until_idle` to fast-forward.
#[derive(Debug)]
pub struct TurnOrchestrator<R = GameRng> {
    store: GameStore<R>,
    timers: TimerQueue<Deferred>,
    opponent_delay: Duration,
    result_display_delay: Duration,
    animating: bool,
    opponent_timer: Option<TimerId>,
    animation_timer: Option<TimerId>,
    observed_revision: u64,
}

impl TurnOrchestrator<GameRng> {
    /// Build an orchestrator and its store from configuration.
    pub fn from_config(config: &ShootoutConfig) -> Result<Self, ConfigError> {
        let store = GameStore::from_config(config)?;
        Ok(Self::new(store).with_delays(config.opponent_delay, config.result_display_delay))
    }
}

impl<R: OutcomeSource> TurnOrchestrator<R> {
    /// Wrap a store, using `ANIMATION_DELAY` for both delays.
    pub fn new(store: GameStore<R>) -> Self {
        let observed_revision = store.revision();
        let mut orchestrator = Self {
            store,
            timers: TimerQueue::new(),
            opponent_delay: ANIMATION_DELAY,
            result_display_delay: ANIMATION_DELAY,
            animating: false,
            opponent_timer: None,
            animation_timer: None,
            observed_revision,
        };
        // A store handed over mid-round still needs its opponent scheduled.
        orchestrator.reschedule();
        orchestrator
    }

    /// Override the opponent and result display delays.
    ///
    /// Only affects timers scheduled afterwards.
    pub fn with_delays(mut self, opponent_delay: Duration, result_display_delay: Duration) -> Self {
        self.opponent_delay = opponent_delay;
        self.result_display_delay = result_display_delay;
        if self.opponent_timer.is_some() {
            self.reschedule();
        }
        self
    }

    // === Commands ===

    /// The player asks to shoot.
    ///
    /// Returns `true` if the kick reached the store. Kicks while a previous
    /// kick is animating, while the opponent is due, or after the game ended
    /// are dropped.
    pub fn request_player_turn(&mut self) -> bool {
        if self.animating {
            debug!("kick dropped: previous shot still animating");
            return false;
        }
        if !self.store.can_player_act() {
            debug!(
                awaiting_opponent = self.store.state().awaiting_opponent_turn,
                phase = ?self.store.state().phase,
                "kick dropped: not the player's turn"
            );
            return false;
        }

        self.animating = true;
        self.store.player_turn();
        self.observe();
        true
    }

    /// Start over. Never gated.
    pub fn reset(&mut self) {
        self.animating = false;
        self.store.reset();
        self.observe();
    }

    // === Time ===

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// When the next deferred action is due, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Move the clock forward by `elapsed`, firing everything that falls due.
    ///
    /// Returns the number of timers fired.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let until = self.timers.now().saturating_add(elapsed);
        self.advance_to(until)
    }

    /// Move the clock to `until`, firing everything that falls due in order.
    ///
    /// Returns the number of timers fired.
    pub fn advance_to(&mut self, until: Duration) -> usize {
        let mut fired = 0;
        while let Some((id, task)) = self.timers.pop_due(until) {
            self.fire(id, task);
            fired += 1;
        }
        fired
    }

    /// Fire timers until none remain.
    ///
    /// Terminates because timers are only armed by state changes, and a
    /// game runs out of turns.
    pub fn run_until_idle(&mut self) -> usize {
        let mut fired = 0;
        while let Some(deadline) = self.timers.next_deadline() {
            fired += self.advance_to(deadline);
        }
        fired
    }

    // === Queries ===

    /// Current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        self.store.state()
    }

    /// The underlying store (read-only).
    #[must_use]
    pub fn store(&self) -> &GameStore<R> {
        &self.store
    }

    /// The rules in play.
    #[must_use]
    pub fn rules(&self) -> &ShootoutRules {
        self.store.rules()
    }

    /// Whether the player's last kick is still animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Whether an opponent shot is scheduled.
    #[must_use]
    pub fn opponent_pending(&self) -> bool {
        self.opponent_timer
            .is_some_and(|id| self.timers.is_pending(id))
    }

    /// Presentation snapshot of the current frame.
    #[must_use]
    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard::new(self.store.rules(), self.store.state(), self.animating)
    }

    // === Internals ===

    fn fire(&mut self, id: TimerId, task: Deferred) {
        match task {
            Deferred::OpponentTurn => {
                if self.opponent_timer != Some(id) {
                    trace!(%id, "stale opponent timer skipped");
                    return;
                }
                self.opponent_timer = None;

                if !self.store.state().awaiting_opponent_turn {
                    debug!(%id, "opponent timer fired but opponent not due");
                    return;
                }
                self.store.opponent_turn();
                self.observe();
            }
            Deferred::EndAnimation => {
                if self.animation_timer != Some(id) {
                    trace!(%id, "stale animation timer skipped");
                    return;
                }
                self.animation_timer = None;
                self.animating = false;
                trace!(now = ?self.timers.now(), "kick animation finished");
            }
        }
    }

    /// Re-evaluate timers after a possible state change.
    fn observe(&mut self) {
        let revision = self.store.revision();
        if revision == self.observed_revision {
            return;
        }
        self.observed_revision = revision;
        self.reschedule();
    }

    fn reschedule(&mut self) {
        let state = *self.store.state();

        // Armed before the opponent so that, with equal delays, the kick
        // control is released before the opponent's shot lands.
        if let Some(id) = self.animation_timer.take() {
            self.timers.cancel(id);
        }
        if self.animating && state.last_outcome.is_some() {
            let id = self.timers.schedule(self.result_display_delay, Deferred::EndAnimation);
            self.animation_timer = Some(id);
        }

        if let Some(id) = self.opponent_timer.take() {
            self.timers.cancel(id);
        }
        if state.awaiting_opponent_turn {
            let id = self.timers.schedule(self.opponent_delay, Deferred::OpponentTurn);
            self.opponent_timer = Some(id);
            debug!(delay = ?self.opponent_delay, round = state.current_round, "opponent shot scheduled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedOutcomes;
    use crate::core::state::Outcome;

    fn orchestrator(script: &[Outcome]) -> TurnOrchestrator<ScriptedOutcomes> {
        let store = GameStore::new(
            ShootoutRules::default(),
            ScriptedOutcomes::new(script.iter().copied()).unwrap(),
        );
        TurnOrchestrator::new(store)
    }

    #[test]
    fn test_kick_schedules_opponent() {
        let mut orch = orchestrator(&[Outcome::Success]);
        assert!(orch.request_player_turn());

        assert!(orch.is_animating());
        assert!(orch.opponent_pending());
        assert_eq!(orch.next_deadline(), Some(ANIMATION_DELAY));
        assert_eq!(orch.state().player_score, 1);
    }

    #[test]
    fn test_opponent_fires_after_delay() {
        let mut orch = orchestrator(&[Outcome::Failure]);
        orch.request_player_turn();

        orch.advance(ANIMATION_DELAY - Duration::from_millis(1));
        assert!(orch.state().awaiting_opponent_turn);
        assert_eq!(orch.state().current_round, 1);

        orch.advance(Duration::from_millis(1));
        assert!(!orch.state().awaiting_opponent_turn);
        assert_eq!(orch.state().current_round, 2);
        assert!(!orch.opponent_pending());
    }

    #[test]
    fn test_animation_released_before_opponent_shot() {
        let mut orch = orchestrator(&[Outcome::Success]);
        orch.request_player_turn();

        assert_eq!(orch.advance(ANIMATION_DELAY), 2);
        assert!(!orch.is_animating());
        assert!(orch.store().can_player_act());
        assert_eq!(orch.next_deadline(), None);
    }

    #[test]
    fn test_reset_cancels_pending_opponent() {
        let mut orch = orchestrator(&[Outcome::Success]);
        orch.request_player_turn();
        assert!(orch.opponent_pending());

        orch.reset();
        assert!(!orch.opponent_pending());
        assert!(!orch.is_animating());
        assert_eq!(orch.next_deadline(), None);

        assert_eq!(orch.advance(ANIMATION_DELAY * 4), 0);
        assert_eq!(*orch.state(), GameState::INITIAL);
    }

    #[test]
    fn test_store_handed_over_mid_round() {
        let mut store = GameStore::new(
            ShootoutRules::default(),
            ScriptedOutcomes::constant(Outcome::Success),
        );
        store.player_turn();

        let mut orch = TurnOrchestrator::new(store);
        assert!(orch.opponent_pending());
        orch.run_until_idle();
        assert_eq!(orch.state().opponent_score, 1);
    }

    #[test]
    fn test_custom_delays() {
        let store = GameStore::new(
            ShootoutRules::default(),
            ScriptedOutcomes::constant(Outcome::Success),
        );
        let mut orch = TurnOrchestrator::new(store)
            .with_delays(Duration::from_millis(10), Duration::from_millis(40));

        orch.request_player_turn();
        orch.advance(Duration::from_millis(10));
        assert_eq!(orch.state().current_round, 2);
        // The opponent's result re-arms the animation timer.
        assert!(orch.is_animating());

        orch.advance(Duration::from_millis(39));
        assert!(orch.is_animating());
        orch.advance(Duration::from_millis(1));
        assert!(!orch.is_animating());
    }
}
