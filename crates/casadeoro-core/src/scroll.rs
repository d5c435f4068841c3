//! Global scroll signal.
//!
//! Models the window's scroll event stream as a single-threaded broadcast.
//! Subscribers hold a [`ScrollSubscription`] guard; dropping it detaches the
//! listener, so a subscription lives exactly as long as the component that
//! owns it.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use casadeoro_core::ScrollSignal;
//!
//! let signal = ScrollSignal::new();
//! let last = Rc::new(Cell::new(0.0));
//! let sink = last.clone();
//! let sub = signal.subscribe(move |offset| sink.set(offset));
//!
//! signal.dispatch(120.0);
//! assert_eq!(last.get(), 120.0);
//!
//! drop(sub);
//! signal.dispatch(5.0);
//! assert_eq!(last.get(), 120.0);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Identifier of a registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<RefCell<dyn FnMut(f64)>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

/// Broadcast point for vertical scroll offsets.
///
/// Cloning yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct ScrollSignal {
    inner: Rc<RefCell<Registry>>,
}

impl ScrollSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It stays attached until the returned guard drops.
    #[must_use = "dropping the subscription detaches the listener immediately"]
    pub fn subscribe<F>(&self, listener: F) -> ScrollSubscription
    where
        F: FnMut(f64) + 'static,
    {
        let mut registry = self.inner.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.listeners.push((id, Rc::new(RefCell::new(listener))));
        tracing::trace!(?id, listeners = registry.listeners.len(), "Scroll listener attached");

        ScrollSubscription {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Deliver a scroll offset to every attached listener.
    ///
    /// Listeners are snapshotted first, so a listener may subscribe or
    /// unsubscribe from inside its callback without a borrow conflict.
    /// Non-finite offsets are ignored.
    pub fn dispatch(&self, offset: f64) {
        if !offset.is_finite() {
            tracing::debug!(offset, "Ignoring non-finite scroll offset");
            return;
        }

        let snapshot: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| l.clone())
            .collect();

        for listener in snapshot {
            (listener.borrow_mut())(offset);
        }
    }

    /// Number of currently attached listeners
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl fmt::Debug for ScrollSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.inner.borrow();
        f.debug_struct("ScrollSignal")
            .field("listeners", &registry.listeners.len())
            .finish()
    }
}

/// Guard for an attached scroll listener
#[derive(Debug)]
pub struct ScrollSubscription {
    id: ListenerId,
    registry: Weak<RefCell<Registry>>,
}

impl ScrollSubscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.borrow_mut();
            registry.listeners.retain(|(id, _)| *id != self.id);
            tracing::trace!(id = ?self.id, listeners = registry.listeners.len(), "Scroll listener detached");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn subscribe_and_drop_track_count() {
        let signal = ScrollSignal::new();
        assert_eq!(signal.listener_count(), 0);

        let a = signal.subscribe(|_| {});
        let b = signal.subscribe(|_| {});
        assert_eq!(signal.listener_count(), 2);
        assert_ne!(a.id(), b.id());

        drop(a);
        assert_eq!(signal.listener_count(), 1);
        drop(b);
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn dispatch_reaches_every_listener() {
        let signal = ScrollSignal::new();
        let hits = Rc::new(Cell::new(0));

        let h1 = hits.clone();
        let _a = signal.subscribe(move |_| h1.set(h1.get() + 1));
        let h2 = hits.clone();
        let _b = signal.subscribe(move |_| h2.set(h2.get() + 1));

        signal.dispatch(10.0);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn non_finite_offsets_are_ignored() {
        let signal = ScrollSignal::new();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let _sub = signal.subscribe(move |_| h.set(h.get() + 1));

        signal.dispatch(f64::NAN);
        signal.dispatch(f64::INFINITY);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn guard_outliving_signal_is_harmless() {
        let signal = ScrollSignal::new();
        let sub = signal.subscribe(|_| {});
        drop(signal);
        drop(sub);
    }

    #[test]
    fn listener_may_unsubscribe_itself_during_dispatch() {
        let signal = ScrollSignal::new();
        let slot: Rc<RefCell<Option<ScrollSubscription>>> = Rc::new(RefCell::new(None));

        let inner = slot.clone();
        let sub = signal.subscribe(move |_| {
            inner.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(sub);

        signal.dispatch(1.0);
        assert_eq!(signal.listener_count(), 0);
    }
}
