//! # Lockable value holder.
//!
//! A single-slot container shared as `Arc<Lockable<T>>` across concurrent
//! callers. Reads never block; writes are rejected ([`Lockable::set`]) or
//! parked ([`Lockable::offer`]) while the slot is locked.
//!
//! ## Rules
//! - `value` changes only through a successful `set` or `offer`
//! - Neither `set` nor `offer` touches the lock flag; only `lock`/`unlock` do
//! - After an `unlock`, every parked offer eventually writes (the slot stays
//!   unlocked); the order among concurrent waiters is unspecified
//! - The state mutex is internal and never held across an await

use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::Notify;
use tokio::time;

use crate::error::LockError;

/// State of the slot behind the mutex.
struct Slot<T> {
    value: Option<T>,
    locked: bool,
}

/// A holder for a single value that can be cooperatively locked.
///
/// # Example
/// ```
/// use holdoff::Lockable;
///
/// let holder = Lockable::new(1u32);
/// holder.lock();
/// assert!(holder.set(2).is_err());
///
/// holder.unlock();
/// assert!(holder.set(2).is_ok());
/// assert_eq!(holder.value(), Some(2));
/// ```
pub struct Lockable<T> {
    slot: Mutex<Slot<T>>,
    unlocked: Notify,
}

impl<T> Lockable<T> {
    /// Creates an empty, unlocked holder.
    pub fn empty() -> Self {
        Self {
            slot: Mutex::new(Slot {
                value: None,
                locked: false,
            }),
            unlocked: Notify::new(),
        }
    }

    /// Creates an unlocked holder seeded with `value`.
    pub fn new(value: T) -> Self {
        Self {
            slot: Mutex::new(Slot {
                value: Some(value),
                locked: false,
            }),
            unlocked: Notify::new(),
        }
    }

    /// Creates a holder seeded with `value` and locked immediately.
    pub fn locked(value: T) -> Self {
        Self {
            slot: Mutex::new(Slot {
                value: Some(value),
                locked: true,
            }),
            unlocked: Notify::new(),
        }
    }

    /// Returns whether the slot currently rejects writes.
    pub fn is_locked(&self) -> bool {
        self.slot.lock().locked
    }

    /// Writes `value` now, or fails fast if the slot is locked.
    ///
    /// Does not change the lock flag.
    pub fn set(&self, value: T) -> Result<(), LockError> {
        let mut slot = self.slot.lock();
        if slot.locked {
            return Err(LockError::AlreadyLocked);
        }
        slot.value = Some(value);
        Ok(())
    }

    /// Offers `value`, waiting for the slot to be unlocked.
    ///
    /// With a `timeout`, fails with [`LockError::OfferTimeout`] once the
    /// bound elapses without an unlock, and the value is not written. With
    /// `None`, parks until the slot is unlocked, however long that takes.
    ///
    /// # Example
    /// ```
    /// use holdoff::Lockable;
    ///
    /// #[tokio::main(flavor = "current_thread")]
    /// async fn main() {
    ///     let holder = Lockable::empty();
    ///     holder.offer(7, None).await.unwrap();
    ///     assert_eq!(holder.value(), Some(7));
    /// }
    /// ```
    pub async fn offer(&self, value: T, timeout: Option<Duration>) -> Result<(), LockError> {
        match timeout {
            Some(limit) => match time::timeout(limit, self.write_when_unlocked(value)).await {
                Ok(()) => Ok(()),
                Err(_elapsed) => Err(LockError::OfferTimeout { timeout: limit }),
            },
            None => {
                self.write_when_unlocked(value).await;
                Ok(())
            }
        }
    }

    /// Locks the slot; idempotent.
    pub fn lock(&self) {
        self.slot.lock().locked = true;
    }

    /// Unlocks the slot and wakes parked offers; idempotent.
    pub fn unlock(&self) {
        self.slot.lock().locked = false;
        self.unlocked.notify_waiters();
    }

    /// Parks until the slot is unlocked, then writes atomically.
    ///
    /// The waiter is registered before the flag check, so an `unlock` racing
    /// with the check cannot be missed.
    async fn write_when_unlocked(&self, value: T) {
        let mut value = Some(value);
        loop {
            let notified = self.unlocked.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            {
                let mut slot = self.slot.lock();
                if !slot.locked {
                    slot.value = value.take();
                    return;
                }
            }
            notified.await;
        }
    }
}

impl<T: Clone> Lockable<T> {
    /// Returns a clone of the current value; never blocks, never fails.
    pub fn value(&self) -> Option<T> {
        self.slot.lock().value.clone()
    }
}

impl<T> Default for Lockable<T> {
    /// Returns an empty, unlocked holder.
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn set_on_fresh_holder_is_visible() {
        let holder = Lockable::empty();
        assert_eq!(holder.value(), None);

        holder.set(42).unwrap();
        assert_eq!(holder.value(), Some(42));
    }

    #[test]
    fn set_on_locked_holder_fails_and_leaves_value() {
        let holder = Lockable::new("before");
        holder.lock();

        let err = holder.set("after").unwrap_err();
        assert!(matches!(err, LockError::AlreadyLocked));
        assert_eq!(holder.value(), Some("before"));
    }

    #[test]
    fn set_does_not_lock() {
        let holder = Lockable::empty();
        holder.set(1).unwrap();
        holder.set(2).unwrap();
        assert_eq!(holder.value(), Some(2));
    }

    #[test]
    fn lock_and_unlock_are_idempotent() {
        let holder = Lockable::new(0);
        holder.lock();
        holder.lock();
        assert!(holder.is_locked());

        holder.unlock();
        holder.unlock();
        assert!(!holder.is_locked());
    }

    #[test]
    fn locked_constructor_rejects_writes() {
        let holder = Lockable::locked(7);
        assert!(holder.is_locked());
        assert!(holder.set(8).is_err());
        assert_eq!(holder.value(), Some(7));
    }

    #[tokio::test]
    async fn offer_on_unlocked_holder_writes_immediately() {
        let holder = Lockable::empty();
        holder.offer(5, None).await.unwrap();
        assert_eq!(holder.value(), Some(5));
    }

    #[tokio::test(start_paused = true)]
    async fn offer_parks_until_unlock() {
        let holder = Arc::new(Lockable::locked(0));

        let writer = Arc::clone(&holder);
        let handle = tokio::spawn(async move { writer.offer(9, None).await });

        // Give the offer time to park; it must not complete while locked.
        time::sleep(secs(60)).await;
        assert!(!handle.is_finished());
        assert_eq!(holder.value(), Some(0));

        holder.unlock();
        handle.await.unwrap().unwrap();
        assert_eq!(holder.value(), Some(9));
    }

    #[tokio::test(start_paused = true)]
    async fn offer_times_out_when_never_unlocked() {
        let holder = Lockable::locked("kept");

        let started = time::Instant::now();
        let err = holder.offer("dropped", Some(secs(5))).await.unwrap_err();

        assert!(matches!(err, LockError::OfferTimeout { timeout } if timeout == secs(5)));
        assert_eq!(started.elapsed(), secs(5));
        assert_eq!(holder.value(), Some("kept"));
    }

    #[tokio::test(start_paused = true)]
    async fn offer_wins_a_race_with_a_late_unlock() {
        let holder = Arc::new(Lockable::locked(0));

        let writer = Arc::clone(&holder);
        let handle = tokio::spawn(async move { writer.offer(3, Some(secs(10))).await });

        time::sleep(secs(2)).await;
        holder.unlock();

        handle.await.unwrap().unwrap();
        assert_eq!(holder.value(), Some(3));
    }

    #[tokio::test(start_paused = true)]
    async fn every_parked_offer_completes_after_unlock() {
        let holder = Arc::new(Lockable::locked(0));

        let first = Arc::clone(&holder);
        let second = Arc::clone(&holder);
        let h1 = tokio::spawn(async move { first.offer(1, None).await });
        let h2 = tokio::spawn(async move { second.offer(2, None).await });

        time::sleep(secs(1)).await;
        holder.unlock();

        h1.await.unwrap().unwrap();
        h2.await.unwrap().unwrap();

        // Last writer wins; either may have been last.
        let value = holder.value().unwrap();
        assert!(value == 1 || value == 2);
    }
}
