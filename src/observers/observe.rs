//! # Core observer trait
//!
//! `Observe` is the extension point for watching a session's ticks: one
//! [`AttemptStarted`](crate::EventKind::AttemptStarted) per attempt
//! (including the first), each scheduled sleep, and the terminal state.
//!
//! ## Contract
//! - Called inline from the circuit, strictly between attempts; a slow
//!   observer delays the session, so keep handlers short or hand work off.
//! - The observer never influences the session: events are fire-and-forget
//!   from the circuit's point of view.

use std::sync::Arc;

use async_trait::async_trait;

use crate::events::Event;

/// Shared handle to an observer.
pub type ObserverRef = Arc<dyn Observe>;

/// Contract for session observers.
///
/// Implementations should avoid blocking the async runtime (prefer async
/// I/O and cooperative waits).
#[async_trait]
pub trait Observe: Send + Sync + 'static {
    /// Handle a single event for this observer.
    async fn on_event(&self, event: &Event);

    /// Human-readable name (for logs/metrics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
