//! # Delay-growth strategy.
//!
//! [`Strategy`] selects the rule used to derive the next delay from the
//! ordered pair `(previous, current)`:
//!
//! - [`Strategy::Linear`] — `next = current + 1s`, sleeping 1, 2, 3, 4, 5…
//! - [`Strategy::Fibonacci`] — `next = previous + current`, sleeping 1, 2, 3, 5, 8…
//! - [`Strategy::Exponential`] — `next = current × 2`, sleeping 1, 2, 4, 8, 16…
//!
//! Linear seeds the pair at `(0s, 1s)`; Fibonacci and Exponential seed at
//! `(1s, 1s)`, which is why the fibonacci sleep sequence skips the leading
//! double one.
//!
//! # Example
//! ```
//! use std::time::Duration;
//! use holdoff::Strategy;
//!
//! let one = Duration::from_secs(1);
//! let two = Duration::from_secs(2);
//!
//! assert_eq!(Strategy::Linear.grow(one, two), Duration::from_secs(3));
//! assert_eq!(Strategy::Fibonacci.grow(one, two), Duration::from_secs(3));
//! assert_eq!(Strategy::Exponential.grow(one, two), Duration::from_secs(4));
//! ```

use std::time::Duration;

/// One delay unit. All growth rules operate in whole-second steps.
pub(crate) const STEP: Duration = Duration::from_secs(1);

/// Rule for deriving the next delay from the previous two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Grow by one second per attempt (1, 2, 3, 4, 5…).
    Linear,

    /// Grow by the sum of the previous two delays (1, 2, 3, 5, 8…).
    Fibonacci,

    /// Double the delay each attempt (1, 2, 4, 8, 16…).
    Exponential,
}

impl Default for Strategy {
    /// Returns [`Strategy::Linear`], the gentlest growth rule.
    fn default() -> Self {
        Strategy::Linear
    }
}

impl Strategy {
    /// Computes the next delay from the `(previous, current)` pair.
    ///
    /// Pure arithmetic: capping and the pair shift are handled by
    /// [`Delays::advance`](crate::policies::Delays::advance).
    pub fn grow(self, previous: Duration, current: Duration) -> Duration {
        match self {
            Strategy::Linear => current + STEP,
            Strategy::Fibonacci => previous + current,
            Strategy::Exponential => current * 2,
        }
    }

    /// Returns the seed pair for this strategy.
    ///
    /// Linear starts at `(0s, 1s)`; Fibonacci and Exponential at `(1s, 1s)`.
    pub(crate) fn seeds(self) -> (Duration, Duration) {
        match self {
            Strategy::Linear => (Duration::ZERO, STEP),
            Strategy::Fibonacci | Strategy::Exponential => (STEP, STEP),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn linear_adds_one_step() {
        assert_eq!(Strategy::Linear.grow(secs(0), secs(1)), secs(2));
        assert_eq!(Strategy::Linear.grow(secs(4), secs(5)), secs(6));
    }

    #[test]
    fn fibonacci_sums_the_pair() {
        assert_eq!(Strategy::Fibonacci.grow(secs(1), secs(1)), secs(2));
        assert_eq!(Strategy::Fibonacci.grow(secs(3), secs(5)), secs(8));
    }

    #[test]
    fn exponential_doubles_current() {
        assert_eq!(Strategy::Exponential.grow(secs(1), secs(1)), secs(2));
        assert_eq!(Strategy::Exponential.grow(secs(4), secs(8)), secs(16));
    }

    #[test]
    fn seeds_match_strategy() {
        assert_eq!(Strategy::Linear.seeds(), (secs(0), secs(1)));
        assert_eq!(Strategy::Fibonacci.seeds(), (secs(1), secs(1)));
        assert_eq!(Strategy::Exponential.seeds(), (secs(1), secs(1)));
    }
}
