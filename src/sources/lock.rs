//! Wallet lock observers.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

/// Identifies a registered lock listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Callback invoked with the new lock state.
pub type LockListener = Box<dyn Fn(bool) + Send + Sync>;

/// A source of wallet lock changes using listener registration.
pub trait LockStateSource {
    fn is_locked(&self) -> bool;

    /// Registers a listener. It is not called with the current state.
    fn add_listener(&self, listener: LockListener) -> ListenerId;

    /// Returns `false` if the id was not registered.
    fn remove_listener(&self, id: ListenerId) -> bool;
}

#[derive(Default)]
struct LockInner {
    locked: bool,
    next_id: u64,
    listeners: Vec<(ListenerId, Arc<dyn Fn(bool) + Send + Sync>)>,
}

/// In-memory wallet lock. Clones share state and listeners.
#[derive(Clone, Default)]
pub struct WalletLock {
    inner: Arc<Mutex<LockInner>>,
}

impl std::fmt::Debug for WalletLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("WalletLock")
            .field("locked", &inner.locked)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl WalletLock {
    #[must_use]
    pub fn new(locked: bool) -> Self {
        Self {
            inner: Arc::new(Mutex::new(LockInner {
                locked,
                ..LockInner::default()
            })),
        }
    }

    /// Sets the lock state and notifies listeners if it changed.
    pub fn set_locked(&self, locked: bool) {
        let listeners: Vec<_> = {
            let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            if inner.locked == locked {
                return;
            }
            inner.locked = locked;
            inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
        };

        debug!(locked, listeners = listeners.len(), "wallet lock changed");
        // Called outside the mutex so listeners may query the lock.
        for listener in listeners {
            listener(locked);
        }
    }

    /// Flips the lock state and returns the new value.
    pub fn toggle(&self) -> bool {
        let locked = !self.is_locked();
        self.set_locked(locked);
        locked
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .listeners
            .len()
    }
}

impl LockStateSource for WalletLock {
    fn is_locked(&self) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .locked
    }

    fn add_listener(&self, listener: LockListener) -> ListenerId {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let id = ListenerId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Arc::from(listener)));
        id
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let before = inner.listeners.len();
        inner.listeners.retain(|(lid, _)| *lid != id);
        inner.listeners.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_listeners_notified_on_change_only() {
        let lock = WalletLock::new(false);
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let (c, s) = (Arc::clone(&calls), Arc::clone(&seen));
        lock.add_listener(Box::new(move |locked| {
            c.fetch_add(1, Ordering::SeqCst);
            s.lock().unwrap().push(locked);
        }));

        lock.set_locked(true);
        lock.set_locked(true);
        lock.set_locked(false);

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(*seen.lock().unwrap(), vec![true, false]);
    }

    #[test]
    fn test_removed_listener_is_not_called() {
        let lock = WalletLock::new(false);
        let calls = Arc::new(AtomicUsize::new(0));

        let c = Arc::clone(&calls);
        let id = lock.add_listener(Box::new(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(lock.listener_count(), 1);

        assert!(lock.remove_listener(id));
        assert!(!lock.remove_listener(id));
        assert_eq!(lock.listener_count(), 0);

        lock.toggle();
        assert!(lock.is_locked());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_listener_can_query_lock() {
        let lock = WalletLock::new(false);
        let observed = Arc::new(Mutex::new(None));

        let (l, o) = (lock.clone(), Arc::clone(&observed));
        lock.add_listener(Box::new(move |_| {
            *o.lock().unwrap() = Some(l.is_locked());
        }));

        lock.set_locked(true);
        assert_eq!(*observed.lock().unwrap(), Some(true));
    }
}
