//! The backoff circuit: repeated polling of a condition with growing delays.
//!
//! ## Contents
//! - [`BackoffConfig`] strategy + budget + cap + initial delay
//! - [`Backoff`] the owned session; [`Backoff::start`] drives it to a
//!   terminal state
//!
//! ## Lifecycle
//! ```text
//! Backoff::new(config, condition)
//!   └─► start(token)
//!         ├─► initial delay (if configured)
//!         └─► loop:
//!               ├─► observer: AttemptStarted
//!               ├─► condition.check(child token)
//!               │     ├─ Ok(true)  ─► ConditionMet, Ok(())
//!               │     └─ Err(e)    ─► propagate unchanged
//!               ├─► advance delay pair (clamped to max_interval)
//!               ├─► budget check ─► BudgetExceeded
//!               └─► cancellable sleep ─► next attempt
//! ```

mod circuit;
mod config;

pub use circuit::Backoff;
pub use config::BackoffConfig;
