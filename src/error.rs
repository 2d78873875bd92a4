//! Error types used by the backoff circuit and the value holders.
//!
//! This module defines two main error enums:
//!
//! - [`BackoffError`] — terminal failures of a backoff session.
//! - [`LockError`] — rejected writes against a lockable value holder.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging/metrics.
//! Nothing is swallowed or retried here: every error surfaces to the immediate
//! caller, and retrying a finished session means building a new circuit.

use std::time::Duration;
use thiserror::Error;

/// Boxed error type produced by user conditions.
///
/// A condition may fail with any error; the circuit surfaces it unchanged
/// through [`BackoffError::Condition`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// # Errors produced by a backoff session.
///
/// A session ends in exactly one of three ways besides success: the overall
/// budget ran out, the condition itself failed, or the caller cancelled it.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum BackoffError {
    /// Cumulative wait reached the configured budget.
    #[error("backoff budget of {budget:?} exhausted")]
    BudgetExceeded {
        /// The configured overall budget that was exhausted.
        budget: Duration,
    },

    /// The user condition failed; its error is surfaced unchanged (not retried).
    #[error(transparent)]
    Condition(#[from] BoxError),

    /// The session was cancelled via its [`CancellationToken`](tokio_util::sync::CancellationToken).
    #[error("backoff session cancelled")]
    Canceled,
}

impl BackoffError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    /// use holdoff::BackoffError;
    ///
    /// let err = BackoffError::BudgetExceeded { budget: Duration::from_secs(10) };
    /// assert_eq!(err.as_label(), "backoff_budget_exceeded");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            BackoffError::BudgetExceeded { .. } => "backoff_budget_exceeded",
            BackoffError::Condition(_) => "backoff_condition_failed",
            BackoffError::Canceled => "backoff_canceled",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            BackoffError::BudgetExceeded { budget } => {
                format!("budget exhausted after {budget:?}")
            }
            BackoffError::Condition(error) => format!("condition failed: {error}"),
            BackoffError::Canceled => "session cancelled".to_string(),
        }
    }

    /// Indicates whether the session gave up on its time budget.
    ///
    /// Lets callers branch between "gave up waiting" and "the check itself
    /// failed" without matching on variants.
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    /// use holdoff::BackoffError;
    ///
    /// let err = BackoffError::BudgetExceeded { budget: Duration::from_secs(5) };
    /// assert!(err.is_budget_exceeded());
    ///
    /// assert!(!BackoffError::Canceled.is_budget_exceeded());
    /// ```
    pub fn is_budget_exceeded(&self) -> bool {
        matches!(self, BackoffError::BudgetExceeded { .. })
    }
}

/// # Errors produced by lockable value holders.
///
/// Raised by [`Lockable::set`](crate::Lockable::set), [`Lockable::offer`](crate::Lockable::offer),
/// and [`Latchable::latch`](crate::Latchable::latch).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum LockError {
    /// A synchronous write was rejected because the holder is locked.
    #[error("value is already locked")]
    AlreadyLocked,

    /// An offer waited for an unlock that never came within its timeout.
    #[error("offer timed out after {timeout:?}")]
    OfferTimeout {
        /// The caller-specified wait bound that elapsed.
        timeout: Duration,
    },
}

impl LockError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use holdoff::LockError;
    ///
    /// assert_eq!(LockError::AlreadyLocked.as_label(), "lock_already_locked");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            LockError::AlreadyLocked => "lock_already_locked",
            LockError::OfferTimeout { .. } => "lock_offer_timeout",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            LockError::AlreadyLocked => "value is already locked".to_string(),
            LockError::OfferTimeout { timeout } => {
                format!("offer expired after {timeout:?}")
            }
        }
    }
}
