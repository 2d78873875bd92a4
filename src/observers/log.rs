//! # Simple logging observer for debugging and demos.
//!
//! [`LogWriter`] prints events to stdout in a human-readable format.
//!
//! ## Output format
//! ```text
//! [attempt] cond=replica-ready attempt=1
//! [backoff] cond=replica-ready delay=2s attempt=1
//! [met] cond=replica-ready attempt=3
//! [budget-exceeded] cond=replica-ready budget=10s
//! [cancelled] cond=replica-ready
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};
use crate::observers::Observe;

/// Simple stdout logging observer.
///
/// Enabled via the `logging` feature. Not intended for production use —
/// implement a custom [`Observe`] for structured logging or metrics.
pub struct LogWriter;

#[async_trait]
impl Observe for LogWriter {
    async fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::AttemptStarted => {
                if let (Some(cond), Some(att)) = (&e.condition, e.attempt) {
                    println!("[attempt] cond={cond} attempt={att}");
                }
            }
            EventKind::BackoffScheduled => {
                println!(
                    "[backoff] cond={:?} delay={:?} attempt={:?}",
                    e.condition, e.delay, e.attempt
                );
            }
            EventKind::ConditionMet => {
                println!("[met] cond={:?} attempt={:?}", e.condition, e.attempt);
            }
            EventKind::BudgetExceeded => {
                println!(
                    "[budget-exceeded] cond={:?} budget={:?}",
                    e.condition, e.budget
                );
            }
            EventKind::Canceled => {
                println!("[cancelled] cond={:?}", e.condition);
            }
        }
    }

    fn name(&self) -> &'static str {
        "log_writer"
    }
}
