//! # Per-session delay state.
//!
//! [`Delays`] holds the `(previous, current)` pair one backoff session
//! advances once per failed attempt. Each [`advance`](Delays::advance)
//! returns the delay to sleep **now** (the pre-growth `current`) and computes
//! the growth for the *following* gap.
//!
//! When a cap is supplied, the grown value is clamped to it, so the sleep
//! sequence plateaus exactly at the cap and never exceeds it — including for
//! caps that fall between two sequence values.

use std::time::Duration;

use super::strategy::Strategy;

/// Seeded delay pair for one backoff session.
///
/// ## Rules
/// - `advance` is called once per failed attempt, never on success
/// - The returned value is what the session sleeps before the next attempt
/// - Growth feeds only from the pair, never from wall-clock time
#[derive(Clone, Copy, Debug)]
pub struct Delays {
    strategy: Strategy,
    previous: Duration,
    current: Duration,
}

impl Delays {
    /// Seeds a fresh pair for the given strategy.
    pub fn new(strategy: Strategy) -> Self {
        let (previous, current) = strategy.seeds();
        Self {
            strategy,
            previous,
            current,
        }
    }

    /// Returns the delay the next sleep would use, without advancing.
    pub fn current(&self) -> Duration {
        self.current
    }

    /// Advances the pair and returns the delay to sleep now.
    ///
    /// Computes `next` via the strategy, clamps it to `cap` when one is set,
    /// then shifts: `previous := current`, `current := next`. The returned
    /// value is the pre-shift `current`.
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    /// use holdoff::{Delays, Strategy};
    ///
    /// let mut delays = Delays::new(Strategy::Exponential);
    /// assert_eq!(delays.advance(None), Duration::from_secs(1));
    /// assert_eq!(delays.advance(None), Duration::from_secs(2));
    /// assert_eq!(delays.advance(None), Duration::from_secs(4));
    /// ```
    pub fn advance(&mut self, cap: Option<Duration>) -> Duration {
        let slept = self.current;
        let mut next = self.strategy.grow(self.previous, self.current);
        if let Some(cap) = cap {
            next = next.min(cap);
        }
        self.previous = slept;
        self.current = next;
        slept
    }
}
