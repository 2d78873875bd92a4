//! # Demo: retry_until_ready
//!
//! Demonstrates a [`Backoff`] circuit polling a flaky readiness check that
//! misses twice before resolving, with a custom observer printing each tick.
//!
//! ## Flow
//! ```text
//! Backoff::start(token)
//!   ├─► AttemptStarted{1} → check → false
//!   ├─► BackoffScheduled{delay=1s} → sleep
//!   ├─► AttemptStarted{2} → check → false
//!   ├─► BackoffScheduled{delay=2s} → sleep
//!   ├─► AttemptStarted{3} → check → true
//!   └─► ConditionMet → Ok(())
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example retry_until_ready
//! ```

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use tokio_util::sync::CancellationToken;

use holdoff::{
    Backoff, BackoffConfig, BoxError, ConditionFn, ConditionRef, Event, EventKind, Observe,
    ObserverRef, Strategy,
};

static MISS_COUNT: AtomicU64 = AtomicU64::new(0);

/// Minimal observer printing each session event.
struct Printer;

#[async_trait::async_trait]
impl Observe for Printer {
    async fn on_event(&self, event: &Event) {
        match event.kind {
            EventKind::AttemptStarted => {
                println!("[attempt] #{:?}", event.attempt);
            }
            EventKind::BackoffScheduled => {
                println!("[backoff] sleeping {:?}", event.delay);
            }
            EventKind::ConditionMet => {
                println!("[met] after {:?} attempts", event.attempt);
            }
            _ => {}
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. Define a readiness check that misses twice before resolving.
    let ready: ConditionRef = ConditionFn::arc("warmup", |_ctx: CancellationToken| async move {
        let call = MISS_COUNT.fetch_add(1, Ordering::Relaxed) + 1;
        println!("[warmup] probe #{call}");
        Ok::<bool, BoxError>(call > 2)
    });

    // 2. Linear growth, no budget: delays run 1s, 2s, 3s...
    let config = BackoffConfig {
        strategy: Strategy::Linear,
        ..BackoffConfig::default()
    };

    // 3. Drive the session to its terminal state.
    let observer: ObserverRef = Arc::new(Printer);
    Backoff::new(config, ready)
        .with_observer(observer)
        .start(CancellationToken::new())
        .await?;

    println!("[main] ready.");
    Ok(())
}
