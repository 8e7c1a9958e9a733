//! Color-changed notifications to any number of subscribers.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::color::Rgba;

/// Handler invoked with the newly selected color.
pub type ColorHandler = Rc<dyn Fn(&Rgba)>;

/// Identifies a subscription on an [`EventBus`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub u64);

#[derive(Default)]
struct Registry {
    next_subscriber_id: u64,
    handlers: Vec<(SubscriberId, ColorHandler)>,
}

/// Dispatches color-changed notifications.
///
/// The picker owns the bus and lives on a single thread, so handlers are
/// neither `Send` nor `Sync`.
#[derive(Default)]
pub struct EventBus {
    registry: Rc<RefCell<Registry>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.len())
            .finish()
    }
}

impl EventBus {
    /// Create a bus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. It stays registered for as long as the returned
    /// [`Subscription`] is alive.
    #[must_use = "dropping the subscription unsubscribes the handler"]
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&Rgba) + 'static,
    {
        let handler: ColorHandler = Rc::new(handler);

        let mut registry = self.registry.borrow_mut();
        registry.next_subscriber_id += 1;
        let id = SubscriberId(registry.next_subscriber_id);
        registry.handlers.push((id, handler));

        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Notify every subscriber. Handlers may drop their own or other
    /// subscriptions while being notified; the set of handlers called is the
    /// one registered when the notification started.
    pub fn emit(&self, color: Rgba) {
        let handlers = self
            .registry
            .borrow()
            .handlers
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect::<Vec<_>>();

        log::trace!("emitting {color:?} to {} subscribers", handlers.len());

        for handler in handlers {
            handler(&color);
        }
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.registry.borrow().handlers.len()
    }

    /// Returns true if nobody is subscribed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every handler. Outstanding [`Subscription`]s become inert.
    pub fn clear(&self) {
        self.registry.borrow_mut().handlers.clear();
    }
}

/// A cancelable registration on an [`EventBus`]. Dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriberId,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// The id of this subscription.
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Returns true while the handler is still registered.
    pub fn is_active(&self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let active = registry.borrow().handlers.iter().any(|(id, _)| *id == self.id);
        active
    }

    /// Unsubscribe now. Same as dropping the subscription.
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .handlers
                .retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn every_subscriber_is_notified() {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let a = {
            let seen = Rc::clone(&seen);
            bus.subscribe(move |c| seen.borrow_mut().push(("a", *c)))
        };
        let b = {
            let seen = Rc::clone(&seen);
            bus.subscribe(move |c| seen.borrow_mut().push(("b", *c)))
        };
        assert_ne!(a.id(), b.id());
        assert_eq!(bus.len(), 2);

        bus.emit(Rgba::BLACK);
        assert_eq!(*seen.borrow(), vec![("a", Rgba::BLACK), ("b", Rgba::BLACK)]);
    }

    #[test]
    fn dropping_the_token_unsubscribes() {
        let bus = EventBus::new();
        let count = Rc::new(Cell::new(0));

        let subscription = {
            let count = Rc::clone(&count);
            bus.subscribe(move |_| count.set(count.get() + 1))
        };
        bus.emit(Rgba::WHITE);
        assert!(subscription.is_active());

        subscription.cancel();
        bus.emit(Rgba::WHITE);
        assert_eq!(count.get(), 1);
        assert!(bus.is_empty());
    }

    #[test]
    fn clear_makes_tokens_inert() {
        let bus = EventBus::new();
        let subscription = bus.subscribe(|_| {});
        bus.clear();
        assert!(!subscription.is_active());
        drop(subscription);
        assert!(bus.is_empty());
    }

    #[test]
    fn token_outlives_bus() {
        let bus = EventBus::new();
        let subscription = bus.subscribe(|_| {});
        drop(bus);
        assert!(!subscription.is_active());
    }

    #[test]
    fn handler_can_unsubscribe_while_notified() {
        let bus = EventBus::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::default();
        let count = Rc::new(Cell::new(0));

        let subscription = {
            let slot = Rc::clone(&slot);
            let count = Rc::clone(&count);
            bus.subscribe(move |_| {
                count.set(count.get() + 1);
                slot.borrow_mut().take();
            })
        };
        *slot.borrow_mut() = Some(subscription);

        bus.emit(Rgba::WHITE);
        bus.emit(Rgba::WHITE);
        assert_eq!(count.get(), 1);
        assert!(bus.is_empty());
    }
}
