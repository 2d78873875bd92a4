//! Session events emitted by the backoff circuit.
//!
//! ## Contents
//! - [`EventKind`] classification of session events
//! - [`Event`] the record handed to an observer, with optional metadata
//!
//! Events are delivered to at most one observer, strictly sequentially with
//! the attempts that produce them (see [`Observe`](crate::Observe)).

mod event;

pub use event::{Event, EventKind};
