//! Delay-growth policies for the backoff circuit.
//!
//! This module groups the knobs that control **how long** a circuit waits
//! between attempts.
//!
//! ## Contents
//! - [`Strategy`] how the next delay is derived from the previous two
//!   (linear / fibonacci / exponential)
//! - [`Delays`] the seeded `(previous, current)` pair a session advances
//!   once per failed attempt
//!
//! ## Quick wiring
//! ```text
//! BackoffConfig { strategy: Strategy, max_interval, .. }
//!      └─► backoff::Backoff::start uses:
//!           - Delays::new(strategy) to seed the session
//!           - delays.advance(cap) to pick each sleep
//! ```

mod delays;
mod strategy;

pub use delays::Delays;
pub use strategy::Strategy;
