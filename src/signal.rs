//! Synchronous observer lists for setting and controller change notification.
//!
//! Every mutable setting and controller in this crate exposes a [`Signal`]
//! that subscribers connect callbacks to. Delivery is synchronous, on the
//! emitting thread, in registration order. There is no disconnect: every
//! subscription in this crate lives exactly as long as the object that owns
//! the signal.

use std::cell::RefCell;

/// A list of callbacks invoked synchronously when a value changes.
///
/// Single-threaded by construction. Emission is not reentrant: a subscriber
/// must not emit the same signal it is being notified by.
pub struct Signal<T> {
    slots: RefCell<Vec<Box<dyn FnMut(&T)>>>,
}

impl<T> Signal<T> {
    /// Create an empty signal.
    pub fn new() -> Self {
        Self {
            slots: RefCell::new(Vec::new()),
        }
    }

    /// Register a callback. It stays connected for the signal's lifetime.
    pub fn connect(&self, slot: impl FnMut(&T) + 'static) {
        self.slots.borrow_mut().push(Box::new(slot));
    }

    /// Invoke every connected callback with `value`, in registration order.
    pub fn emit(&self, value: &T) {
        for slot in self.slots.borrow_mut().iter_mut() {
            slot(value);
        }
    }

    /// Number of connected callbacks.
    pub fn slot_count(&self) -> usize {
        self.slots.borrow().len()
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}
