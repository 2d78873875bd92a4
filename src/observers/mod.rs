//! Observers for backoff session events.
//!
//! This module provides the [`Observe`] trait and, behind the `logging`
//! feature, a built-in stdout implementation.
//!
//! ## Event flow
//! ```text
//! Backoff::start ── on_event(&Event) ──► your Observe impl
//!        │                                 (awaited inline, one event
//!        ▼                                  at a time, never overlapping
//!   condition.check                         an attempt)
//! ```
//!
//! ## Implementing custom observers
//! ```
//! use async_trait::async_trait;
//! use holdoff::{Event, EventKind, Observe};
//!
//! struct Metrics;
//!
//! #[async_trait]
//! impl Observe for Metrics {
//!     async fn on_event(&self, event: &Event) {
//!         if event.kind == EventKind::BudgetExceeded {
//!             // increment a give-up counter
//!         }
//!     }
//! }
//! ```

mod observe;

pub use observe::{Observe, ObserverRef};

#[cfg(feature = "logging")]
mod log;
#[cfg(feature = "logging")]
pub use log::LogWriter;
