//! Condition abstraction polled by the backoff circuit.
//!
//! This module defines the [`Condition`] trait (async, cancelable) and a
//! convenient function-backed implementation [`ConditionFn`]. The common
//! handle type is [`ConditionRef`], an `Arc<dyn Condition>` suitable for
//! sharing across the runtime.
//!
//! A condition receives a `CancellationToken` and may check it to abandon
//! slow work when the session is cancelled mid-attempt.

mod condition;
mod condition_fn;

pub use condition::{Condition, ConditionRef};
pub use condition_fn::ConditionFn;
