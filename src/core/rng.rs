//! Outcome sources: the only randomness in a shootout.
//!
//! ## Key Features
//!
//! - **Injectable**: the store draws through `OutcomeSource`, so tests can
//!   script every shot
//! - **Deterministic**: `GameRng` with the same seed replays the same game
//! - **Uniform**: production draws are independent 50/50 coin flips
//!
//! ## Usage
//!
//! ```
//! use penalty_shootout::core::{GameRng, Outcome, OutcomeSource, ScriptedOutcomes};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//! assert_eq!(rng1.next_outcome(), rng2.next_outcome());
//!
//! let mut script = ScriptedOutcomes::new([Outcome::Success, Outcome::Failure]).unwrap();
//! assert_eq!(script.next_outcome(), Outcome::Success);
//! assert_eq!(script.next_outcome(), Outcome::Failure);
//! assert_eq!(script.next_outcome(), Outcome::Success);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::state::Outcome;

/// Capability to draw the next shot outcome.
pub trait OutcomeSource {
    /// Draw one outcome. Each call is an independent shot.
    fn next_outcome(&mut self) -> Outcome;
}

impl<S: OutcomeSource + ?Sized> OutcomeSource for &mut S {
    fn next_outcome(&mut self) -> Outcome {
        (**self).next_outcome()
    }
}

impl<S: OutcomeSource + ?Sized> OutcomeSource for Box<S> {
    fn next_outcome(&mut self) -> Outcome {
        (**self).next_outcome()
    }
}

/// Seeded RNG for shot outcomes.
///
/// Uses ChaCha8 for speed while keeping the sequence reproducible from the
/// seed alone.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Probability that a shot scores.
    pub const SUCCESS_PROBABILITY: f64 = 0.5;

    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The chosen seed is still recorded so a game can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }
}

impl OutcomeSource for GameRng {
    fn next_outcome(&mut self) -> Outcome {
        Outcome::from_bool(self.gen_bool(Self::SUCCESS_PROBABILITY))
    }
}

/// Replays a fixed sequence of outcomes, wrapping around at the end.
#[derive(Clone, Debug)]
pub struct ScriptedOutcomes {
    script: Vec<Outcome>,
    cursor: usize,
}

impl ScriptedOutcomes {
    /// Create a scripted source. Returns `None` for an empty script.
    pub fn new(script: impl IntoIterator<Item = Outcome>) -> Option<Self> {
        let script: Vec<_> = script.into_iter().collect();
        if script.is_empty() {
            return None;
        }
        Some(Self { script, cursor: 0 })
    }

    /// A source that always yields the same outcome.
    #[must_use]
    pub fn constant(outcome: Outcome) -> Self {
        Self {
            script: vec![outcome],
            cursor: 0,
        }
    }

    /// Number of outcomes drawn so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl OutcomeSource for ScriptedOutcomes {
    fn next_outcome(&mut self) -> Outcome {
        let outcome = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        outcome
    }
}
