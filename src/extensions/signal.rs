use std::cell::{Cell, RefCell};
use std::fmt;

use tracing::debug;

type Subscriber = Box<dyn FnOnce()>;

/// Fire-once, payload-free notification owned by the common ancestor of the
/// components it connects (for example the typewriter headline and the globe).
///
/// Share it by reference or `Rc`. Firing twice is a no-op, and subscribers
/// added after the signal fired run immediately.
pub struct OnceSignal {
    name: &'static str,
    fired: Cell<bool>,
    subscribers: RefCell<Vec<Subscriber>>,
}

impl OnceSignal {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fired: Cell::new(false),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    pub fn subscribe(&self, subscriber: impl FnOnce() + 'static) {
        if self.fired.get() {
            subscriber();
            return;
        }
        self.subscribers.borrow_mut().push(Box::new(subscriber));
    }

    /// Notifies every subscriber in subscription order.
    ///
    /// Returns `false` when the signal had already fired.
    pub fn fire(&self) -> bool {
        if self.fired.replace(true) {
            return false;
        }
        // Released before running callbacks so they may subscribe re-entrantly.
        let subscribers = std::mem::take(&mut *self.subscribers.borrow_mut());
        debug!(
            signal = self.name,
            subscribers = subscribers.len(),
            "once-signal fired"
        );
        for subscriber in subscribers {
            subscriber();
        }
        true
    }
}

impl fmt::Debug for OnceSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnceSignal")
            .field("name", &self.name)
            .field("fired", &self.fired.get())
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}
