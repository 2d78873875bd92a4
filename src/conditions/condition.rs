//! # Asynchronous condition trait.
//!
//! A [`Condition`] has a stable [`name`](Condition::name) and an async
//! [`check`](Condition::check) that resolves `true` once whatever the caller
//! is waiting on has happened. The circuit polls it one attempt at a time;
//! attempts never overlap.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::BoxError;

/// Shared handle to a condition.
pub type ConditionRef = Arc<dyn Condition>;

/// # Asynchronous, cancelable readiness check.
///
/// Resolving `Ok(true)` stops the circuit successfully; `Ok(false)` schedules
/// another attempt; any `Err` terminates the session immediately and is
/// surfaced to the caller unchanged.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use tokio_util::sync::CancellationToken;
/// use holdoff::{BoxError, Condition};
///
/// struct PortOpen;
///
/// #[async_trait]
/// impl Condition for PortOpen {
///     fn name(&self) -> &str { "port-open" }
///
///     async fn check(&self, _ctx: CancellationToken) -> Result<bool, BoxError> {
///         // probe something...
///         Ok(true)
///     }
/// }
/// ```
#[async_trait]
pub trait Condition: Send + Sync + 'static {
    /// Returns a stable, human-readable condition name.
    fn name(&self) -> &str;

    /// Performs one attempt.
    ///
    /// The token is a child of the session token; long-running checks should
    /// watch it and bail out promptly when the session is cancelled.
    async fn check(&self, ctx: CancellationToken) -> Result<bool, BoxError>;
}
