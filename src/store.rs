//! Generic observable container: the reactive primitive behind the canvas
//! and app stores.
//!
//! `Store<T>` is an explicit publisher. It owns one value and a registry of
//! observer callbacks, and invokes every observer synchronously, in
//! registration order, after each mutation. Handles are `Clone` and share the
//! same value, so a store is constructed once at startup and passed to
//! whichever components need it — there are no module globals. Storage is
//! `Rc`/`RefCell`-backed and everything stays on the browser event-loop
//! thread.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Callback<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Subscriber<T> {
    id: u64,
    callback: Callback<T>,
}

impl<T> Clone for Subscriber<T> {
    fn clone(&self) -> Self {
        Self { id: self.id, callback: Rc::clone(&self.callback) }
    }
}

struct StoreInner<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<Subscriber<T>>>,
    next_id: Cell<u64>,
}

/// A single-threaded observable value holder.
///
/// Cloning the handle is cheap and shares the underlying value; dropping the
/// last handle drops the value and the subscriber registry with it.
pub struct Store<T> {
    inner: Rc<StoreInner<T>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

/// Deregistration handle returned by [`Store::subscribe`].
///
/// Holds only a weak reference, so an outstanding handle never keeps a dead
/// store alive; unsubscribing from one is a no-op.
#[must_use = "dropping a Subscription without calling unsubscribe leaves the observer registered"]
pub struct Subscription<T> {
    id: u64,
    store: Weak<StoreInner<T>>,
}

impl<T> Subscription<T> {
    /// Remove the observer; it receives no further notifications.
    ///
    /// Safe to call from inside a notification callback: a subscriber removed
    /// mid-broadcast is skipped for the remainder of that broadcast.
    pub fn unsubscribe(self) {
        if let Some(inner) = self.store.upgrade() {
            inner.subscribers.borrow_mut().retain(|s| s.id != self.id);
            log::trace!("store: observer {} unsubscribed", self.id);
        }
    }
}

impl<T: Clone + 'static> Store<T> {
    /// Create a store holding `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                value: RefCell::new(initial),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Register an observer.
    ///
    /// The observer is invoked immediately with the current value, and again
    /// after every subsequent [`set`](Self::set) or [`update`](Self::update),
    /// in the order those mutations are issued.
    pub fn subscribe(&self, observer: impl FnMut(&T) + 'static) -> Subscription<T> {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        let callback: Callback<T> = Rc::new(RefCell::new(observer));
        self.inner
            .subscribers
            .borrow_mut()
            .push(Subscriber { id, callback: Rc::clone(&callback) });
        log::trace!("store: observer {id} subscribed");
        let current = self.inner.value.borrow().clone();
        (callback.borrow_mut())(&current);
        Subscription { id, store: Rc::downgrade(&self.inner) }
    }

    /// Replace the held value wholesale, then notify all subscribers before
    /// returning.
    pub fn set(&self, value: T) {
        *self.inner.value.borrow_mut() = value;
        self.notify_all();
    }

    /// Mutate the held value in place, then notify all subscribers before
    /// returning. Fields the mutator does not touch carry over unchanged.
    pub fn update(&self, mutator: impl FnOnce(&mut T)) {
        mutator(&mut *self.inner.value.borrow_mut());
        self.notify_all();
    }

    /// A clone of the current value. No subscription, no side effects.
    #[must_use]
    pub fn snapshot(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Borrow the current value for a synchronous read without cloning.
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&*self.inner.value.borrow())
    }

    /// Invoke every currently registered observer with the current value.
    ///
    /// The registry and the value are cloned up front, so a callback may
    /// unsubscribe (honored for the rest of the broadcast) or subscribe (the
    /// newcomer sees only later updates) without invalidating the iteration.
    fn notify_all(&self) {
        let current = self.inner.value.borrow().clone();
        let subscribers: Vec<Subscriber<T>> = self.inner.subscribers.borrow().clone();
        log::trace!("store: notifying {} observers", subscribers.len());
        for subscriber in subscribers {
            let active = self.inner.subscribers.borrow().iter().any(|s| s.id == subscriber.id);
            if active {
                (subscriber.callback.borrow_mut())(&current);
            }
        }
    }
}
