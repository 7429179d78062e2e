//! Single-threaded timer queue over virtual time.
//!
//! Time is a `Duration` measured from the moment the queue was created.
//! Nothing here sleeps: a driver advances the clock, and due timers are
//! popped in deadline order.

use std::collections::BTreeMap;
use std::time::Duration;

use tracing::trace;

/// Handle to a scheduled timer.
///
/// Ids increase monotonically, so ordering by `(deadline, id)` fires timers
/// with equal deadlines in scheduling order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// Raw id value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// Deferred tasks keyed by deadline.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    now: Duration,
    next_id: u64,
    pending: BTreeMap<(Duration, TimerId), T>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Create an empty queue at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: BTreeMap::new(),
        }
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers waiting to fire.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no timers are waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Schedule `task` to fire `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        let deadline = self.now.saturating_add(delay);
        self.pending.insert((deadline, id), task);
        trace!(%id, ?deadline, "timer scheduled");

        id
    }

    /// Cancel a pending timer.
    ///
    /// Returns `false` if the timer already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(_, pending_id), _| *pending_id != id);
        let cancelled = self.pending.len() != before;
        if cancelled {
            trace!(%id, "timer cancelled");
        }
        cancelled
    }

    /// Whether `id` is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.keys().any(|(_, pending_id)| *pending_id == id)
    }

    /// Deadline of the earliest pending timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Pop the earliest timer due at or before `until`.
    ///
    /// Advances the clock to that timer's deadline. When nothing is due the
    /// clock moves to `until` instead. Time never runs backwards.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, T)> {
        if !self.next_deadline().is_some_and(|deadline| deadline <= until) {
            self.now = self.now.max(until);
            return None;
        }

        let ((deadline, id), task) = self.pending.pop_first()?;
        self.now = self.now.max(deadline);
        Some((id, task))
    }
}
