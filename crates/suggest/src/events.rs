//! Process-wide pointer events with component-scoped subscriptions.
//!
//! A subscription is registered on mount and removed on unmount or drop, so
//! repeated mounts never accumulate listeners.

use std::collections::HashMap;
use std::sync::mpsc;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Where a pointer-down landed, relative to the autocomplete component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Input,
    Dropdown,
    Outside,
}

impl PointerTarget {
    pub fn is_outside(&self) -> bool {
        matches!(self, PointerTarget::Outside)
    }
}

type Listeners = HashMap<u64, mpsc::Sender<PointerTarget>>;

#[derive(Default)]
struct BusInner {
    listeners: Listeners,
    next_id: u64,
}

/// Global pointer-down event source.
#[derive(Clone, Default)]
pub struct PointerEvents {
    inner: Arc<Mutex<BusInner>>,
}

impl PointerEvents {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BusInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a listener. It stays attached until the returned
    /// [`Subscription`] is detached or dropped.
    pub fn attach(&self) -> Subscription {
        let (tx, rx) = mpsc::channel();
        let mut inner = self.lock();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.listeners.insert(id, tx);
        Subscription {
            id,
            rx,
            bus: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver a pointer-down to every attached listener.
    pub fn dispatch(&self, target: PointerTarget) {
        let mut inner = self.lock();
        // receivers gone without detaching are pruned here
        inner.listeners.retain(|_, tx| tx.send(target).is_ok());
    }

    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }
}

/// A live listener registration.
pub struct Subscription {
    id: u64,
    rx: mpsc::Receiver<PointerTarget>,
    bus: Weak<Mutex<BusInner>>,
}

impl Subscription {
    /// Events dispatched since the last drain, oldest first
    pub fn drain(&self) -> Vec<PointerTarget> {
        self.rx.try_iter().collect()
    }

    pub fn detach(self) {
        // Drop does the work
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .listeners
                .remove(&self.id);
        }
    }
}
