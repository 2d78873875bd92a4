//! # Backoff session configuration.
//!
//! Provides [`BackoffConfig`], the settings one session is built from.
//!
//! ## Sentinel values
//! - `max_wait = 0s` → no overall budget (the session may wait forever)
//! - `max_interval = 0s` → per-step delays grow without a cap
//! - `initial_delay = 0s` → the first attempt runs immediately

use std::time::Duration;

use crate::policies::Strategy;

/// Configuration for a backoff session.
///
/// ## Field semantics
/// - `strategy`: how delays grow between attempts
/// - `max_wait`: overall elapsed-time budget from session start (`0s` = none)
/// - `max_interval`: cap on any single inter-attempt delay (`0s` = none)
/// - `initial_delay`: one-time delay before the first attempt (`0s` = none)
///
/// All fields are public for flexibility. Prefer the helper accessors to
/// avoid sprinkling sentinel checks across the codebase.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use holdoff::{BackoffConfig, Strategy};
///
/// let config = BackoffConfig {
///     strategy: Strategy::Exponential,
///     max_wait: Duration::from_secs(30),
///     ..BackoffConfig::default()
/// };
///
/// assert_eq!(config.budget(), Some(Duration::from_secs(30)));
/// assert_eq!(config.interval_cap(), None);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BackoffConfig {
    /// Delay-growth strategy for this session.
    pub strategy: Strategy,

    /// Overall elapsed-time budget, measured from session start.
    ///
    /// Once exhausted after a failed attempt, the session fails with
    /// [`BackoffError::BudgetExceeded`](crate::BackoffError::BudgetExceeded).
    /// `0s` disables the budget entirely.
    pub max_wait: Duration,

    /// Cap on the per-step delay.
    ///
    /// Once the growth sequence reaches the cap, the delay stays pinned
    /// there. `0s` leaves growth uncapped.
    pub max_interval: Duration,

    /// One-time delay before the first attempt. `0s` skips it.
    pub initial_delay: Duration,
}

impl Default for BackoffConfig {
    /// Returns a config with:
    /// - `strategy = Linear`;
    /// - no budget, no cap, no initial delay.
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            max_wait: Duration::ZERO,
            max_interval: Duration::ZERO,
            initial_delay: Duration::ZERO,
        }
    }
}

impl BackoffConfig {
    /// Returns the overall budget, treating the `0s` sentinel as `None`.
    pub fn budget(&self) -> Option<Duration> {
        Some(self.max_wait).filter(|d| *d > Duration::ZERO)
    }

    /// Returns the per-step delay cap, treating the `0s` sentinel as `None`.
    pub fn interval_cap(&self) -> Option<Duration> {
        Some(self.max_interval).filter(|d| *d > Duration::ZERO)
    }

    /// Returns the initial delay, treating the `0s` sentinel as `None`.
    pub fn warmup(&self) -> Option<Duration> {
        Some(self.initial_delay).filter(|d| *d > Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sentinels_disable_their_knobs() {
        let config = BackoffConfig::default();
        assert_eq!(config.budget(), None);
        assert_eq!(config.interval_cap(), None);
        assert_eq!(config.warmup(), None);
    }

    #[test]
    fn positive_values_pass_through() {
        let config = BackoffConfig {
            strategy: Strategy::Fibonacci,
            max_wait: Duration::from_secs(10),
            max_interval: Duration::from_secs(4),
            initial_delay: Duration::from_millis(500),
        };
        assert_eq!(config.budget(), Some(Duration::from_secs(10)));
        assert_eq!(config.interval_cap(), Some(Duration::from_secs(4)));
        assert_eq!(config.warmup(), Some(Duration::from_millis(500)));
    }
}
