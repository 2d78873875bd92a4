//! # Backoff circuit: one owned retry session.
//!
//! Polls a [`Condition`](crate::Condition) until it resolves true, with
//! growing delays between attempts:
//! - delays per [`Strategy`](crate::Strategy), optionally capped,
//! - an optional overall budget,
//! - an optional one-time initial delay,
//! - cooperative cancellation via [`CancellationToken`].
//!
//! ## Rules
//! - Attempts run **sequentially**; the observer and the condition never
//!   overlap each other or another attempt
//! - [`Backoff::start`] consumes the circuit: one value is one session, and
//!   a second concurrent `start` on the same instance cannot be written
//! - A condition error ends the session immediately and surfaces unchanged
//! - Cancellation is honored before each attempt and during every sleep

use std::time::Duration;

use tokio::{select, time};
use tokio_util::sync::CancellationToken;

use crate::{
    backoff::config::BackoffConfig,
    conditions::{Condition, ConditionRef},
    error::BackoffError,
    events::{Event, EventKind},
    observers::{Observe, ObserverRef},
    policies::Delays,
};

/// One owned backoff session over a single condition.
///
/// # Example
/// ```
/// use tokio_util::sync::CancellationToken;
/// use holdoff::{Backoff, BackoffConfig, BoxError, ConditionFn, ConditionRef, Strategy};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let ready: ConditionRef = ConditionFn::arc("ready", |_ctx: CancellationToken| async {
///         Ok::<bool, BoxError>(true)
///     });
///
///     let config = BackoffConfig {
///         strategy: Strategy::Exponential,
///         ..BackoffConfig::default()
///     };
///
///     Backoff::new(config, ready).start(CancellationToken::new()).await?;
///     Ok(())
/// }
/// ```
pub struct Backoff {
    condition: ConditionRef,
    config: BackoffConfig,
    observer: Option<ObserverRef>,
}

impl Backoff {
    /// Creates a new circuit over the given condition.
    pub fn new(config: BackoffConfig, condition: ConditionRef) -> Self {
        Self {
            condition,
            config,
            observer: None,
        }
    }

    /// Attaches an observer that receives this session's events.
    pub fn with_observer(mut self, observer: ObserverRef) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &BackoffConfig {
        &self.config
    }

    /// Runs the session until the condition resolves true, the budget runs
    /// out, the condition fails, or `token` is cancelled.
    ///
    /// ### Flow
    /// 1. Sleep the initial delay, if configured
    /// 2. Notify the observer (`AttemptStarted`), then await the condition
    /// 3. On `Ok(true)`, resolve; on `Err`, propagate unchanged
    /// 4. On `Ok(false)`, advance the delay pair, check the budget, and
    ///    sleep the pre-growth delay before the next attempt
    ///
    /// ### Budget semantics
    /// The budget is a wall-clock deadline measured from this call. It is
    /// checked after each failed attempt, and the final sleep is clamped to
    /// the remaining budget, so the session fails at the deadline rather
    /// than a full interval past it and never succeeds after it.
    ///
    /// ### Cancellation semantics
    /// The token is checked before each attempt and raced against every
    /// sleep; the condition receives a child token per attempt. Cancellation
    /// yields [`BackoffError::Canceled`].
    pub async fn start(self, token: CancellationToken) -> Result<(), BackoffError> {
        let deadline = self.config.budget().map(|w| time::Instant::now() + w);

        if let Some(warmup) = self.config.warmup() {
            if self.sleep_or_cancel(warmup, &token).await.is_err() {
                return Err(self.cancelled(0).await);
            }
        }

        let mut delays = Delays::new(self.config.strategy);
        let mut attempt: u64 = 0;

        loop {
            if token.is_cancelled() {
                return Err(self.cancelled(attempt).await);
            }

            attempt += 1;
            self.publish(
                Event::new(EventKind::AttemptStarted)
                    .with_condition(self.condition.name())
                    .with_attempt(attempt),
            )
            .await;

            if self.condition.check(token.child_token()).await? {
                self.publish(
                    Event::new(EventKind::ConditionMet)
                        .with_condition(self.condition.name())
                        .with_attempt(attempt),
                )
                .await;
                return Ok(());
            }

            let delay = delays.advance(self.config.interval_cap());
            let sleep = match deadline {
                Some(deadline) => {
                    let now = time::Instant::now();
                    if now >= deadline {
                        return Err(self.give_up(attempt).await);
                    }
                    delay.min(deadline - now)
                }
                None => delay,
            };

            self.publish(
                Event::new(EventKind::BackoffScheduled)
                    .with_condition(self.condition.name())
                    .with_attempt(attempt)
                    .with_delay(sleep),
            )
            .await;

            if self.sleep_or_cancel(sleep, &token).await.is_err() {
                return Err(self.cancelled(attempt).await);
            }

            if let Some(deadline) = deadline {
                if time::Instant::now() >= deadline {
                    return Err(self.give_up(attempt).await);
                }
            }
        }
    }

    /// Sleeps, racing the token. `Err(())` means the token won.
    async fn sleep_or_cancel(&self, delay: Duration, token: &CancellationToken) -> Result<(), ()> {
        select! {
            _ = time::sleep(delay) => Ok(()),
            _ = token.cancelled() => Err(()),
        }
    }

    /// Publishes the terminal budget event and builds the error.
    async fn give_up(&self, attempt: u64) -> BackoffError {
        // budget() is always Some here: give_up is only reached with a deadline.
        let budget = self.config.budget().unwrap_or_default();
        self.publish(
            Event::new(EventKind::BudgetExceeded)
                .with_condition(self.condition.name())
                .with_attempt(attempt)
                .with_budget(budget),
        )
        .await;
        BackoffError::BudgetExceeded { budget }
    }

    /// Publishes the terminal cancellation event and builds the error.
    async fn cancelled(&self, attempt: u64) -> BackoffError {
        self.publish(
            Event::new(EventKind::Canceled)
                .with_condition(self.condition.name())
                .with_attempt(attempt),
        )
        .await;
        BackoffError::Canceled
    }

    async fn publish(&self, event: Event) {
        if let Some(observer) = &self.observer {
            observer.on_event(&event).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        conditions::{ConditionFn, ConditionRef},
        error::BoxError,
        observers::Observe,
        policies::Strategy,
    };
    use async_trait::async_trait;
    use std::io;
    use std::sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    };

    /// Condition that resolves true on the `n`th call, with a call counter.
    fn succeed_on(n: u64) -> (ConditionRef, Arc<AtomicU64>) {
        let calls = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&calls);
        let cond: ConditionRef = ConditionFn::arc("probe", move |_ctx: CancellationToken| {
            let counter = Arc::clone(&counter);
            async move {
                let call = counter.fetch_add(1, Ordering::SeqCst) + 1;
                Ok::<bool, BoxError>(call >= n)
            }
        });
        (cond, calls)
    }

    fn never() -> (ConditionRef, Arc<AtomicU64>) {
        succeed_on(u64::MAX)
    }

    #[derive(Default)]
    struct Recorder {
        attempts: AtomicU64,
        scheduled: AtomicU64,
    }

    #[async_trait]
    impl Observe for Recorder {
        async fn on_event(&self, event: &Event) {
            match event.kind {
                EventKind::AttemptStarted => {
                    self.attempts.fetch_add(1, Ordering::SeqCst);
                }
                EventKind::BackoffScheduled => {
                    self.scheduled.fetch_add(1, Ordering::SeqCst);
                }
                _ => {}
            }
        }
    }

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[tokio::test(start_paused = true)]
    async fn linear_two_misses_then_success() {
        let (cond, calls) = succeed_on(3);
        let config = BackoffConfig {
            strategy: Strategy::Linear,
            ..BackoffConfig::default()
        };

        let started = time::Instant::now();
        let res = Backoff::new(config, cond).start(CancellationToken::new()).await;

        assert!(res.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        // Two intervening delays: 1s then 2s.
        assert_eq!(started.elapsed(), secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn fibonacci_delays_match_sequence() {
        let (cond, calls) = succeed_on(5);
        let config = BackoffConfig {
            strategy: Strategy::Fibonacci,
            ..BackoffConfig::default()
        };

        let started = time::Instant::now();
        Backoff::new(config, cond)
            .start(CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 5);
        // 1 + 2 + 3 + 5
        assert_eq!(started.elapsed(), secs(11));
    }

    #[tokio::test(start_paused = true)]
    async fn capped_exponential_exhausts_budget() {
        let (cond, calls) = never();
        let config = BackoffConfig {
            strategy: Strategy::Exponential,
            max_wait: secs(10),
            max_interval: secs(4),
            ..BackoffConfig::default()
        };

        let started = time::Instant::now();
        let err = Backoff::new(config, cond)
            .start(CancellationToken::new())
            .await
            .unwrap_err();

        // Sleeps 1, 2, 4, then the clamped 3s remainder.
        assert!(matches!(err, BackoffError::BudgetExceeded { budget } if budget == secs(10)));
        assert!(err.is_budget_exceeded());
        assert_eq!(calls.load(Ordering::SeqCst), 4);
        assert_eq!(started.elapsed(), secs(10));
    }

    #[tokio::test(start_paused = true)]
    async fn cannot_succeed_past_the_budget() {
        // Would succeed on call 5, but the 3s budget expires first.
        let (cond, calls) = succeed_on(5);
        let config = BackoffConfig {
            strategy: Strategy::Linear,
            max_wait: secs(3),
            ..BackoffConfig::default()
        };

        let started = time::Instant::now();
        let err = Backoff::new(config, cond)
            .start(CancellationToken::new())
            .await
            .unwrap_err();

        assert!(err.is_budget_exceeded());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(started.elapsed(), secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn condition_error_ends_the_session_unretried() {
        let calls = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&calls);
        let cond: ConditionRef = ConditionFn::arc("faulty", move |_ctx: CancellationToken| {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err::<bool, BoxError>(Box::new(io::Error::new(io::ErrorKind::Other, "boom")))
            }
        });

        let started = time::Instant::now();
        let err = Backoff::new(BackoffConfig::default(), cond)
            .start(CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, BackoffError::Condition(_)));
        assert_eq!(err.to_string(), "boom");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn observer_ticks_once_per_attempt_including_the_first() {
        let (cond, _calls) = succeed_on(3);
        let recorder = Arc::new(Recorder::default());
        let observer: ObserverRef = Arc::clone(&recorder) as ObserverRef;

        Backoff::new(BackoffConfig::default(), cond)
            .with_observer(observer)
            .start(CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(recorder.attempts.load(Ordering::SeqCst), 3);
        assert_eq!(recorder.scheduled.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn initial_delay_precedes_the_first_attempt() {
        let (cond, calls) = succeed_on(1);
        let config = BackoffConfig {
            initial_delay: secs(2),
            ..BackoffConfig::default()
        };

        let started = time::Instant::now();
        Backoff::new(config, cond)
            .start(CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(started.elapsed(), secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_interrupts_a_backoff_sleep() {
        let (cond, _calls) = never();
        let token = CancellationToken::new();
        let circuit = Backoff::new(BackoffConfig::default(), cond);

        let session = token.clone();
        let handle = tokio::spawn(async move { circuit.start(session).await });

        // Land mid-way through the second sleep (2s, starting at t=1s).
        time::sleep(Duration::from_millis(1500)).await;
        token.cancel();

        let res = handle.await.unwrap();
        assert!(matches!(res, Err(BackoffError::Canceled)));
    }
}
