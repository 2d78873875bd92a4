//! # holdoff
//!
//! **Holdoff** is a small async utility library for waiting well: retrying a
//! check with growing delays, and coordinating timed, exclusive writes to a
//! shared value slot.
//!
//! It provides two independent, composable primitives built on tokio:
//!
//! ## Architecture
//! ```text
//!  ┌──────────────────────────────────────────────────────────────┐
//!  │  Backoff (one owned session per start)                       │
//!  │                                                              │
//!  │  start(token)                                                │
//!  │    ├─► initial delay (optional)                              │
//!  │    └─► loop:                                                 │
//!  │          ├─► Observe::on_event(AttemptStarted)               │
//!  │          ├─► Condition::check(child token)                   │
//!  │          │      ├─ true  ─► Ok(())                           │
//!  │          │      └─ error ─► surfaced unchanged               │
//!  │          ├─► next delay: Strategy over (previous, current),  │
//!  │          │   clamped to max_interval                         │
//!  │          ├─► budget check ─► Err(BudgetExceeded)             │
//!  │          └─► cancellable sleep                               │
//!  └──────────────────────────────────────────────────────────────┘
//!
//!  ┌──────────────────────────────────────────────────────────────┐
//!  │  Lockable<T> / Latchable<T> (shared via Arc)                 │
//!  │                                                              │
//!  │  value()          never blocks                               │
//!  │  set(v)           fails fast while locked                    │
//!  │  offer(v, t?)     parks until unlock, bounded by t           │
//!  │  lock()/unlock()  cooperative flag; unlock wakes offers      │
//!  │  latch(v)         write-once, permanently locked             │
//!  └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Features
//! | Area           | Description                                             | Key types / traits                       |
//! |----------------|---------------------------------------------------------|------------------------------------------|
//! | **Backoff**    | Poll an async condition with growing delays.            | [`Backoff`], [`BackoffConfig`]           |
//! | **Policies**   | Select and cap delay growth.                            | [`Strategy`], [`Delays`]                 |
//! | **Conditions** | Define checks as trait impls or plain closures.         | [`Condition`], [`ConditionFn`]           |
//! | **Observers**  | Watch attempts, sleeps, and terminal states.            | [`Observe`], [`Event`], [`EventKind`]    |
//! | **Holders**    | Coordinate exclusive, timed writes to a single slot.    | [`Lockable`], [`Latchable`]              |
//! | **Errors**     | Typed failures for sessions and holders.                | [`BackoffError`], [`LockError`]          |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use tokio_util::sync::CancellationToken;
//! use holdoff::{Backoff, BackoffConfig, BoxError, ConditionFn, ConditionRef, Strategy};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // A condition resolves true once whatever you are waiting on is done.
//!     let ready: ConditionRef = ConditionFn::arc("ready", |_ctx: CancellationToken| async {
//!         Ok::<bool, BoxError>(true)
//!     });
//!
//!     let config = BackoffConfig {
//!         strategy: Strategy::Fibonacci,
//!         ..BackoffConfig::default()
//!     };
//!
//!     Backoff::new(config, ready).start(CancellationToken::new()).await?;
//!     Ok(())
//! }
//! ```

mod backoff;
mod conditions;
mod error;
mod events;
mod observers;
mod policies;
mod slots;

// ---- Public re-exports ----

pub use backoff::{Backoff, BackoffConfig};
pub use conditions::{Condition, ConditionFn, ConditionRef};
pub use error::{BackoffError, BoxError, LockError};
pub use events::{Event, EventKind};
pub use observers::{Observe, ObserverRef};
pub use policies::{Delays, Strategy};
pub use slots::{Latchable, Lockable};

// Optional: expose a simple built-in logging observer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observers::LogWriter;
