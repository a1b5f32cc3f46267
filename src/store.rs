//! Observable state cells shared between the core stores and the UI layer.
//!
//! A [`Store`] is a single-threaded mutable cell: `set` updates the value and
//! then synchronously notifies every subscriber before it returns. A
//! [`Derived`] is a read-only projection of a store through a pure function,
//! recomputed on each upstream notification.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback<T> = Rc<RefCell<dyn FnMut(&T)>>;
type Subscribers<T> = Rc<RefCell<Vec<(u64, Callback<T>)>>>;

/// A mutable observable cell.
///
/// Cloning a `Store` produces another handle to the same cell. Stores are
/// not `Send`: all reads, writes, and notifications happen on the UI thread.
pub struct Store<T> {
    value: Rc<RefCell<T>>,
    subscribers: Subscribers<T>,
    next_id: Rc<Cell<u64>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            subscribers: Rc::clone(&self.subscribers),
            next_id: Rc::clone(&self.next_id),
        }
    }
}

impl<T: Clone + 'static> Store<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    /// Current value of the cell.
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Replace the value, then notify subscribers in registration order.
    ///
    /// The backing value is updated before any subscriber runs, so a
    /// subscriber that calls [`Store::get`] observes the new value.
    pub fn set(&self, value: T) {
        *self.value.borrow_mut() = value;
        self.notify();
    }

    /// Register a callback invoked on every subsequent `set`.
    ///
    /// The callback is not invoked at subscription time. Dropping the
    /// returned [`Subscription`] removes the callback.
    pub fn subscribe(&self, f: impl FnMut(&T) + 'static) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(f))));

        let subscribers = Rc::downgrade(&self.subscribers);
        Subscription::new(move || {
            if let Some(subscribers) = subscribers.upgrade() {
                subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
            }
        })
    }

    /// Build a read-only projection of this store through `f`.
    pub fn derive<U: Clone + 'static>(&self, f: impl Fn(&T) -> U + 'static) -> Derived<U> {
        let inner = Store::new(f(&self.value.borrow()));
        let handle = inner.clone();
        let source = self.subscribe(move |value| handle.set(f(value)));
        Derived {
            inner,
            _source: source,
        }
    }

    fn notify(&self) {
        // Snapshot outside the borrow so subscribers can call get() or
        // subscribe()/unsubscribe() while the notification runs. Subscribers
        // added mid-notification do not see the in-flight value.
        let current = self.value.borrow().clone();
        let snapshot: Vec<Callback<T>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in snapshot {
            (callback.borrow_mut())(&current);
        }
    }
}

/// A read-only cell derived from a [`Store`], kept current by re-running its
/// projection function on each upstream notification.
pub struct Derived<U> {
    inner: Store<U>,
    _source: Subscription,
}

impl<U: Clone + 'static> Derived<U> {
    pub fn get(&self) -> U {
        self.inner.get()
    }

    pub fn subscribe(&self, f: impl FnMut(&U) + 'static) -> Subscription {
        self.inner.subscribe(f)
    }
}

/// Handle to a registered subscriber; the callback is removed when this is
/// dropped or explicitly unsubscribed.
#[must_use = "dropping a Subscription removes the subscriber immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_updates_value() {
        let store = Store::new(1);
        store.set(2);
        assert_eq!(store.get(), 2);
    }

    #[test]
    fn test_subscribers_notified_in_registration_order() {
        let store = Store::new(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&seen);
        let _a = store.subscribe(move |v| first.borrow_mut().push(("a", *v)));
        let second = Rc::clone(&seen);
        let _b = store.subscribe(move |v| second.borrow_mut().push(("b", *v)));

        store.set(7);
        assert_eq!(*seen.borrow(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn test_subscriber_observes_value_already_updated() {
        let store = Store::new(0);
        let inner = store.clone();
        let observed = Rc::new(Cell::new(0));
        let slot = Rc::clone(&observed);
        let _sub = store.subscribe(move |_| slot.set(inner.get()));

        store.set(42);
        assert_eq!(observed.get(), 42);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let store = Store::new(0);
        let count = Rc::new(Cell::new(0));
        let slot = Rc::clone(&count);
        let sub = store.subscribe(move |_| slot.set(slot.get() + 1));

        store.set(1);
        sub.unsubscribe();
        store.set(2);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let store = Store::new(0);
        let count = Rc::new(Cell::new(0));
        let slot = Rc::clone(&count);
        {
            let _sub = store.subscribe(move |_| slot.set(slot.get() + 1));
            store.set(1);
        }
        store.set(2);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_derived_starts_from_current_value() {
        let store = Store::new(3);
        let doubled = store.derive(|v| v * 2);
        assert_eq!(doubled.get(), 6);
    }

    #[test]
    fn test_derived_recomputes_on_set() {
        let store = Store::new(1);
        let doubled = store.derive(|v| v * 2);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let slot = Rc::clone(&seen);
        let _sub = doubled.subscribe(move |v| slot.borrow_mut().push(*v));

        store.set(5);
        store.set(10);
        assert_eq!(doubled.get(), 20);
        assert_eq!(*seen.borrow(), vec![10, 20]);
    }
}
