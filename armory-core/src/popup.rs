//! Single-slot publish-replace-latest channel backing the popup visibility
//! stream.
//!
//! The application holds exactly one of these per popup kind; "show"
//! publishes a request into the slot and "hide" clears it. Publishing
//! replaces whatever was held (last write wins), so at most one request is
//! ever live. Subscribers are notified after every visible change and read
//! the slot synchronously, which makes a clear appear atomic to them.
//!
//! Single-threaded by construction (`RefCell` inside); on wasm the slot
//! lives in a `thread_local`.

use std::cell::RefCell;
use std::rc::Rc;

/// Handle returned by [`PopupSlot::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

struct SlotInner<T> {
    current: Option<T>,
    next_id: u64,
    listeners: Vec<(SubscriptionId, Rc<dyn Fn()>)>,
}

pub struct PopupSlot<T> {
    inner: RefCell<SlotInner<T>>,
}

impl<T> Default for PopupSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PopupSlot<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RefCell::new(SlotInner {
                current: None,
                next_id: 0,
                listeners: Vec::new(),
            }),
        }
    }

    /// Replace the held value and notify subscribers.
    pub fn publish(&self, value: T) {
        self.inner.borrow_mut().current = Some(value);
        self.notify();
    }

    /// Drop the held value, if any. Clearing an empty slot is a no-op and
    /// does not notify.
    pub fn clear(&self) {
        let cleared = {
            let mut inner = self.inner.borrow_mut();
            inner.current.take().is_some()
        };
        if cleared {
            self.notify();
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().current.is_none()
    }

    /// Register a listener called after every publish and every non-empty
    /// clear.
    pub fn subscribe(&self, listener: Rc<dyn Fn()>) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, listener));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .borrow_mut()
            .listeners
            .retain(|(listener_id, _)| *listener_id != id);
    }

    fn notify(&self) {
        // Listeners read the slot re-entrantly; release the borrow first.
        let listeners: Vec<Rc<dyn Fn()>> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener();
        }
    }
}

impl<T: Clone> PopupSlot<T> {
    /// Snapshot of the held value.
    #[must_use]
    pub fn current(&self) -> Option<T> {
        self.inner.borrow().current.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn publish_replaces_latest() {
        let slot = PopupSlot::new();
        slot.publish(1_u32);
        slot.publish(2_u32);
        assert_eq!(slot.current(), Some(2));
    }

    #[test]
    fn clear_is_idempotent() {
        let slot = PopupSlot::new();
        let fired = Rc::new(Cell::new(0_u32));
        {
            let fired = Rc::clone(&fired);
            slot.subscribe(Rc::new(move || fired.set(fired.get() + 1)));
        }

        slot.publish("item");
        assert_eq!(fired.get(), 1);

        slot.clear();
        assert!(slot.is_empty());
        assert_eq!(fired.get(), 2);

        // Second clear leaves the slot in the same absent state, silently.
        slot.clear();
        assert!(slot.is_empty());
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let slot = PopupSlot::new();
        let fired = Rc::new(Cell::new(0_u32));
        let id = {
            let fired = Rc::clone(&fired);
            slot.subscribe(Rc::new(move || fired.set(fired.get() + 1)))
        };

        slot.publish(());
        slot.unsubscribe(id);
        slot.publish(());
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn listener_may_read_the_slot() {
        let slot = Rc::new(PopupSlot::new());
        let seen = Rc::new(Cell::new(None));
        let reader: Rc<dyn Fn()> = {
            let slot = Rc::clone(&slot);
            let seen = Rc::clone(&seen);
            Rc::new(move || seen.set(slot.current()))
        };
        slot.subscribe(reader);
        slot.publish(9_u8);
        assert_eq!(seen.get(), Some(9));
    }
}
