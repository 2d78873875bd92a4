//! Lockable single-slot value holders.
//!
//! ## Contents
//! - [`Lockable`] a slot whose writers must respect a cooperative lock flag;
//!   `offer` waits (optionally bounded) for an unlock
//! - [`Latchable`] the stricter write-once sibling: latching a value locks
//!   it permanently
//!
//! The lock is a cooperative flag over the slot, not a mutex over callers:
//! readers are never blocked, and writers are rejected or parked rather
//! than queued with any fairness guarantee.

mod latchable;
mod lockable;

pub use latchable::Latchable;
pub use lockable::Lockable;
