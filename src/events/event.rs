//! # Session events emitted by the backoff circuit.
//!
//! The [`EventKind`] enum classifies event types across two categories:
//! - **Tick events**: one per attempt ([`EventKind::AttemptStarted`]) plus
//!   the sleep scheduled after a miss ([`EventKind::BackoffScheduled`])
//! - **Terminal events**: how the session ended (condition met, budget
//!   exceeded, cancelled)
//!
//! The [`Event`] struct carries additional metadata such as timestamps, the
//! condition name, attempt numbers, and delays.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically across all sessions in the process.
//!
//! ## Example
//! ```
//! use std::time::Duration;
//! use holdoff::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::BackoffScheduled)
//!     .with_condition("replica-ready")
//!     .with_attempt(3)
//!     .with_delay(Duration::from_secs(4));
//!
//! assert_eq!(ev.kind, EventKind::BackoffScheduled);
//! assert_eq!(ev.condition.as_deref(), Some("replica-ready"));
//! assert_eq!(ev.attempt, Some(3));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::{Duration, SystemTime};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of session events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Tick events ===
    /// An attempt is starting; emitted exactly once per attempt, before the
    /// condition runs.
    ///
    /// Sets:
    /// - `condition`: condition name
    /// - `attempt`: attempt number (1-based)
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    AttemptStarted,

    /// The attempt missed; a sleep is scheduled before the next one.
    ///
    /// Sets:
    /// - `condition`: condition name
    /// - `attempt`: the attempt that missed
    /// - `delay`: how long the session sleeps before the next attempt
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    BackoffScheduled,

    // === Terminal states ===
    /// The condition resolved true; the session is done.
    ///
    /// Sets:
    /// - `condition`: condition name
    /// - `attempt`: the attempt that succeeded
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    ConditionMet,

    /// The overall budget ran out after a failed attempt.
    ///
    /// Sets:
    /// - `condition`: condition name
    /// - `attempt`: last attempt before giving up
    /// - `budget`: the configured overall budget
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    BudgetExceeded,

    /// The session token was cancelled.
    ///
    /// Sets:
    /// - `condition`: condition name
    /// - `attempt`: attempts completed before cancellation
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    Canceled,
}

/// Session event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,

    /// Name of the condition being polled, if applicable.
    pub condition: Option<Arc<str>>,
    /// Attempt count (starting from 1).
    pub attempt: Option<u64>,
    /// Sleep scheduled before the next attempt.
    pub delay: Option<Duration>,
    /// Configured overall budget (terminal budget events only).
    pub budget: Option<Duration>,
}

impl Event {
    /// Creates a new event of the given kind with the current timestamp and
    /// the next sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            condition: None,
            attempt: None,
            delay: None,
            budget: None,
        }
    }

    /// Sets the condition name.
    pub fn with_condition(mut self, name: &str) -> Self {
        self.condition = Some(Arc::from(name));
        self
    }

    /// Sets the attempt number.
    pub fn with_attempt(mut self, attempt: u64) -> Self {
        self.attempt = Some(attempt);
        self
    }

    /// Sets the scheduled delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Sets the configured budget.
    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.budget = Some(budget);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_numbers_are_monotonic() {
        let first = Event::new(EventKind::AttemptStarted);
        let second = Event::new(EventKind::AttemptStarted);
        assert!(second.seq > first.seq);
    }

    #[test]
    fn builders_set_their_fields() {
        let ev = Event::new(EventKind::BudgetExceeded)
            .with_condition("cache-warm")
            .with_attempt(7)
            .with_budget(Duration::from_secs(10));

        assert_eq!(ev.kind, EventKind::BudgetExceeded);
        assert_eq!(ev.condition.as_deref(), Some("cache-warm"));
        assert_eq!(ev.attempt, Some(7));
        assert_eq!(ev.budget, Some(Duration::from_secs(10)));
        assert_eq!(ev.delay, None);
    }
}
