//! A ready-made [`PreferenceProvider`] for tab controllers.
//!
//! Holds the preferred size behind a mutex together with its subscribers,
//! so a controller can update it from any thread. Subscribers are called
//! outside the lock in registration order.

use std::sync::{Arc, Mutex, MutexGuard, Weak};

use tabsize_common::types::Size;

use super::{PreferenceProvider, SizeCallback, SizeChange, Subscription};

type SharedCallback = Arc<dyn Fn(SizeChange) + Send + Sync>;

struct PreferredInner {
    /// `None` until the first `set`; reported as zero ("keep reference").
    value: Option<Size>,
    next_token: u64,
    subscribers: Vec<(u64, SharedCallback)>,
}

/// Shared, observable preferred size. Clones share the same state.
#[derive(Clone)]
pub struct PreferredSize {
    inner: Arc<Mutex<PreferredInner>>,
}

impl PreferredSize {
    /// A provider with no size yet. It reports `0x0`, deferring both axes
    /// to the reference size.
    pub fn unset() -> Self {
        Self::from_value(None)
    }

    pub fn new(size: Size) -> Self {
        Self::from_value(Some(size))
    }

    fn from_value(value: Option<Size>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(PreferredInner {
                value,
                next_token: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    pub fn get(&self) -> Option<Size> {
        lock(&self.inner).value
    }

    /// Update the preferred size. Subscribers are notified only when the
    /// value actually changes.
    pub fn set(&self, size: Size) {
        let (old, callbacks) = {
            let mut inner = lock(&self.inner);
            if inner.value == Some(size) {
                return;
            }
            let old = inner.value.replace(size);
            let callbacks: Vec<SharedCallback> = inner
                .subscribers
                .iter()
                .map(|(_, cb)| Arc::clone(cb))
                .collect();
            (old, callbacks)
        };

        let change = SizeChange { old, new: size };
        for callback in callbacks {
            callback(change);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        lock(&self.inner).subscribers.len()
    }
}

impl Default for PreferredSize {
    fn default() -> Self {
        Self::unset()
    }
}

impl std::fmt::Debug for PreferredSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = lock(&self.inner);
        f.debug_struct("PreferredSize")
            .field("value", &inner.value)
            .field("subscriber_count", &inner.subscribers.len())
            .finish()
    }
}

impl PreferenceProvider for PreferredSize {
    fn preferred_size(&self) -> Size {
        self.get().unwrap_or(Size::ZERO)
    }

    fn subscribe(&self, callback: SizeCallback) -> Subscription {
        let token = {
            let mut inner = lock(&self.inner);
            let token = inner.next_token;
            inner.next_token += 1;
            inner.subscribers.push((token, Arc::from(callback)));
            token
        };

        let weak: Weak<Mutex<PreferredInner>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                lock(&inner).subscribers.retain(|(t, _)| *t != token);
            }
        })
    }
}

fn lock(inner: &Mutex<PreferredInner>) -> MutexGuard<'_, PreferredInner> {
    inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
