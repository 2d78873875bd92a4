//! # Latchable value holder.
//!
//! The write-once sibling of [`Lockable`](crate::Lockable): latching a value
//! locks the slot permanently. There is no unlock, so a latched value can
//! never be overwritten.

use parking_lot::Mutex;

use crate::error::LockError;

struct Latch<T> {
    value: Option<T>,
    latched: bool,
}

/// A holder whose value, once latched, is permanently immutable.
///
/// # Example
/// ```
/// use holdoff::Latchable;
///
/// let holder = Latchable::empty();
/// holder.latch("first").unwrap();
///
/// assert!(holder.latch("second").is_err());
/// assert_eq!(holder.value(), Some("first"));
/// ```
pub struct Latchable<T> {
    latch: Mutex<Latch<T>>,
}

impl<T> Latchable<T> {
    /// Creates an empty, unlatched holder.
    pub fn empty() -> Self {
        Self {
            latch: Mutex::new(Latch {
                value: None,
                latched: false,
            }),
        }
    }

    /// Creates a holder born latched onto `value`.
    pub fn new(value: T) -> Self {
        Self {
            latch: Mutex::new(Latch {
                value: Some(value),
                latched: true,
            }),
        }
    }

    /// Latches onto `value`, locking the slot permanently.
    ///
    /// Fails with [`LockError::AlreadyLocked`] if a value is already latched,
    /// leaving the existing value untouched.
    pub fn latch(&self, value: T) -> Result<(), LockError> {
        let mut latch = self.latch.lock();
        if latch.latched {
            return Err(LockError::AlreadyLocked);
        }
        latch.value = Some(value);
        latch.latched = true;
        Ok(())
    }

    /// Returns whether a value has been latched.
    pub fn is_latched(&self) -> bool {
        self.latch.lock().latched
    }
}

impl<T: Clone> Latchable<T> {
    /// Returns a clone of the current value; never blocks, never fails.
    pub fn value(&self) -> Option<T> {
        self.latch.lock().value.clone()
    }
}

impl<T> Default for Latchable<T> {
    /// Returns an empty, unlatched holder.
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latches_once() {
        let holder = Latchable::empty();
        assert!(!holder.is_latched());
        assert_eq!(holder.value(), None);

        holder.latch(10).unwrap();
        assert!(holder.is_latched());
        assert_eq!(holder.value(), Some(10));
    }

    #[test]
    fn second_latch_fails_fast() {
        let holder = Latchable::empty();
        holder.latch("kept").unwrap();

        let err = holder.latch("dropped").unwrap_err();
        assert!(matches!(err, LockError::AlreadyLocked));
        assert_eq!(holder.value(), Some("kept"));
    }

    #[test]
    fn constructed_with_value_is_born_latched() {
        let holder = Latchable::new(5);
        assert!(holder.is_latched());
        assert!(holder.latch(6).is_err());
        assert_eq!(holder.value(), Some(5));
    }
}
