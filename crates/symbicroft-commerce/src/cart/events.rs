//! Cart change notification.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartItem};

/// Event name carried by cart change broadcasts.
pub const CART_UPDATED: &str = "cartUpdated";

/// Payload broadcast after every cart mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEvent {
    /// Items after the mutation.
    pub items: Vec<CartItem>,
    /// Cart total after the mutation.
    pub total: f64,
}

impl CartEvent {
    /// Snapshot a cart.
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            items: cart.items().to_vec(),
            total: cart.total(),
        }
    }

    /// Event name, for transports that route by name.
    pub fn name(&self) -> &'static str {
        CART_UPDATED
    }

    /// Sum of quantities, for count badges.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

/// Receives cart change broadcasts.
pub trait CartNotifier {
    /// Deliver one event.
    fn notify(&self, event: &CartEvent);
}

impl<N: CartNotifier + ?Sized> CartNotifier for Arc<N> {
    fn notify(&self, event: &CartEvent) {
        (**self).notify(event)
    }
}

impl<N: CartNotifier + ?Sized> CartNotifier for &N {
    fn notify(&self, event: &CartEvent) {
        (**self).notify(event)
    }
}

/// Drops every event. For contexts with nobody listening.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl CartNotifier for NoopNotifier {
    fn notify(&self, _event: &CartEvent) {}
}

/// Handle returned by [`EventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&CartEvent) + Send + Sync>;

/// In-process publish/subscribe for cart events.
///
/// Listeners run synchronously, in subscription order, on the thread that
/// mutated the cart. A listener may subscribe or unsubscribe while being
/// called; the change applies from the next event.
#[derive(Default)]
pub struct EventBus {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
}

impl EventBus {
    /// Create a bus with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&CartEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock().push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.lock();
        let before = listeners.len();
        listeners.retain(|(sid, _)| *sid != id);
        listeners.len() < before
    }

    /// Number of registered listeners.
    pub fn subscriber_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(SubscriptionId, Listener)>> {
        self.listeners.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl CartNotifier for EventBus {
    fn notify(&self, event: &CartEvent) {
        // Call outside the lock so listeners can touch the bus.
        let listeners: Vec<Listener> = self.lock().iter().map(|(_, l)| Arc::clone(l)).collect();
        tracing::debug!(
            event = CART_UPDATED,
            listeners = listeners.len(),
            items = event.items.len(),
            "broadcasting cart event"
        );
        for listener in listeners {
            listener(event);
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    fn event() -> CartEvent {
        let mut cart = Cart::new();
        cart.add(CartItem::new(ProductId::new(1), "Masala", 100.0, 2));
        CartEvent::from_cart(&cart)
    }

    #[test]
    fn test_event_from_cart() {
        let e = event();
        assert_eq!(e.total, 200.0);
        assert_eq!(e.item_count(), 2);
        assert_eq!(e.name(), "cartUpdated");
    }

    #[test]
    fn test_event_json_shape() {
        let json = serde_json::to_value(event()).unwrap();
        assert!(json["items"].is_array());
        assert_eq!(json["total"], 200.0);
    }

    #[test]
    fn test_bus_delivers_in_order() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        for tag in ["a", "b"] {
            let seen = Arc::clone(&seen);
            bus.subscribe(move |_| seen.lock().unwrap().push(tag));
        }
        bus.notify(&event());
        assert_eq!(*seen.lock().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_unsubscribe() {
        let bus = EventBus::new();
        let hits = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&hits);
        let id = bus.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        bus.notify(&event());
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.notify(&event());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_listener_can_touch_bus() {
        let bus = Arc::new(EventBus::new());
        let inner = Arc::clone(&bus);
        bus.subscribe(move |_| {
            inner.subscriber_count();
        });
        bus.notify(&event());
    }
}
