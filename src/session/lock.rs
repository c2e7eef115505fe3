//! Cooperative table lock.
//!
//! The lock is advisory: participants agree to take it before saving or
//! loading, and a failed attempt is reported instead of waited on.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Mutual exclusion shared by every participant at the table.
pub trait TableLock {
    /// Take the lock if it is free. Never blocks.
    fn try_acquire(&self) -> bool;

    fn release(&self);
}

/// Holds a `TableLock` and releases it when dropped.
pub struct LockGuard<'a> {
    lock: &'a dyn TableLock,
}

impl<'a> LockGuard<'a> {
    /// `None` if the lock is held elsewhere.
    pub fn acquire(lock: &'a dyn TableLock) -> Option<Self> {
        lock.try_acquire().then(|| Self { lock })
    }
}

impl Drop for LockGuard<'_> {
    fn drop(&mut self) {
        self.lock.release();
    }
}

/// In-process lock; clones share the same flag.
#[derive(Clone, Debug, Default)]
pub struct SharedLock {
    held: Arc<AtomicBool>,
}

impl SharedLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::Acquire)
    }
}

impl TableLock for SharedLock {
    fn try_acquire(&self) -> bool {
        self.held
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    fn release(&self) {
        self.held.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_releases_on_drop() {
        let lock = SharedLock::new();
        {
            let _guard = LockGuard::acquire(&lock).unwrap();
            assert!(lock.is_held());
            assert!(LockGuard::acquire(&lock).is_none());
        }
        assert!(!lock.is_held());
        assert!(LockGuard::acquire(&lock).is_some());
    }

    #[test]
    fn test_failed_acquire_keeps_holder_lock() {
        let lock = SharedLock::new();
        let _holder = LockGuard::acquire(&lock).unwrap();

        assert!(LockGuard::acquire(&lock).is_none());
        assert!(lock.is_held());
        assert!(LockGuard::acquire(&lock).is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let lock = SharedLock::new();
        let other = lock.clone();

        assert!(lock.try_acquire());
        assert!(!other.try_acquire());
        lock.release();
        assert!(other.try_acquire());
    }

    #[test]
    fn test_guard_released_on_early_return() {
        fn fails(lock: &SharedLock) -> Result<(), ()> {
            let _guard = LockGuard::acquire(lock).ok_or(())?;
            Err(())
        }

        let lock = SharedLock::new();
        assert!(fails(&lock).is_err());
        assert!(!lock.is_held());
    }
}
