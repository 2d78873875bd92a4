//! # Demo: lock_handoff
//!
//! Demonstrates a [`Lockable`] holder coordinating a writer and the task
//! holding the lock: the writer's offer parks until the holder unlocks,
//! while a second offer with a short timeout gives up.
//!
//! ## Run
//! ```bash
//! cargo run --example lock_handoff
//! ```

use std::sync::Arc;
use std::time::Duration;

use holdoff::Lockable;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. Start locked: the slot holds a draft nobody may overwrite yet.
    let slot = Arc::new(Lockable::locked(String::from("draft")));

    // 2. A patient writer parks until the slot is unlocked.
    let patient = Arc::clone(&slot);
    let handoff = tokio::spawn(async move {
        println!("[patient] offering...");
        patient.offer(String::from("final"), None).await
    });

    // 3. An impatient writer gives up after 100ms.
    let impatient = slot
        .offer(String::from("hasty"), Some(Duration::from_millis(100)))
        .await;
    println!("[impatient] {:?}", impatient.unwrap_err());

    // 4. Synchronous writes fail fast while locked.
    println!("[sync] {:?}", slot.set(String::from("direct")).unwrap_err());

    // 5. Release the slot; the parked offer completes.
    tokio::time::sleep(Duration::from_millis(200)).await;
    slot.unlock();
    handoff.await??;

    println!("[main] value = {:?}", slot.value());
    Ok(())
}
