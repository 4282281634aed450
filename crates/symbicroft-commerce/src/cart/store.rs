//! Persistent, observable cart.

use serde::{Deserialize, Serialize};
use symbicroft_store::{StorageBackend, Store};

use crate::cart::{
    Cart, CartChange, CartEvent, CartItem, CartNotifier, EventBus, SubscriptionId,
};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Storage key the cart lives under.
pub const CART_KEY: &str = "symbicroft_cart";

/// Cart store settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Storage key for the serialized item list.
    #[serde(default = "default_key")]
    pub key: String,
}

fn default_key() -> String {
    CART_KEY.to_string()
}

impl Default for CartConfig {
    fn default() -> Self {
        Self { key: default_key() }
    }
}

/// The client-side cart, persisted under one storage key.
///
/// Every read loads the full item list from storage and every mutation writes
/// the full list back, then broadcasts a [`CartEvent`]. No operation returns an
/// error: unreadable state reads as an empty cart, unreachable storage turns
/// mutations into logged no-ops.
///
/// # Example
///
/// ```rust,ignore
/// let cart = CartStore::new(MemoryStorage::new(), EventBus::new());
/// cart.subscribe(|event| println!("{} items", event.item_count()));
///
/// cart.add_item(CartItem::new(ProductId::new(1), "Masala", 100.0, 2));
/// assert_eq!(cart.get_total(), 200.0);
/// ```
#[derive(Debug)]
pub struct CartStore<B, N = EventBus> {
    store: Store<B>,
    notifier: N,
    config: CartConfig,
}

impl<B: StorageBackend, N: CartNotifier> CartStore<B, N> {
    /// Create a store using the default key.
    pub fn new(backend: B, notifier: N) -> Self {
        Self::with_config(backend, notifier, CartConfig::default())
    }

    /// Create a store with explicit settings.
    pub fn with_config(backend: B, notifier: N, config: CartConfig) -> Self {
        Self {
            store: Store::new(backend),
            notifier,
            config,
        }
    }

    /// Storage key in use.
    pub fn key(&self) -> &str {
        &self.config.key
    }

    /// Borrow the notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Borrow the storage backend.
    pub fn backend(&self) -> &B {
        self.store.backend()
    }

    /// Load the cart once, for callers that need several reads.
    pub fn snapshot(&self) -> Cart {
        match self.load() {
            Ok(cart) => cart,
            Err(e) => {
                tracing::warn!(key = %self.config.key, error = %e, "cart unreadable, treating as empty");
                Cart::new()
            }
        }
    }

    /// All items in insertion order. Empty when nothing is stored.
    pub fn get_items(&self) -> Vec<CartItem> {
        self.snapshot().into_items()
    }

    /// Add an item, merging quantities with an existing line for the same product.
    ///
    /// Items with a non-positive quantity or a negative or non-finite price are
    /// rejected without touching storage. Returns whether the cart changed.
    pub fn add_item(&self, item: CartItem) -> bool {
        if let Err(e) = item.validate() {
            tracing::warn!(product_id = %item.product_id, error = %e, "rejected cart item");
            return false;
        }

        let mut cart = self.snapshot();
        let product_id = item.product_id;
        let change = cart.add(item);
        self.commit(&cart, product_id, change)
    }

    /// Set a line's quantity. Zero or below removes the line; an unknown
    /// product is a no-op. Returns whether the cart changed.
    pub fn update_quantity(&self, product_id: ProductId, quantity: i64) -> bool {
        let mut cart = self.snapshot();
        let change = cart.set_quantity(product_id, quantity);
        self.commit(&cart, product_id, change)
    }

    /// Remove a product's line. An unknown product is a no-op. Returns whether
    /// the cart changed.
    pub fn remove_item(&self, product_id: ProductId) -> bool {
        let mut cart = self.snapshot();
        let change = cart.remove(product_id);
        self.commit(&cart, product_id, change)
    }

    /// Delete the stored cart entirely and broadcast an empty cart.
    pub fn clear_cart(&self) -> bool {
        if let Err(e) = self.store.delete(&self.config.key) {
            tracing::warn!(key = %self.config.key, error = %e, "failed to clear cart");
            return false;
        }
        tracing::debug!(key = %self.config.key, "cart cleared");
        self.notifier.notify(&CartEvent::from_cart(&Cart::new()));
        true
    }

    /// Sum of price times quantity. Zero for an empty cart.
    pub fn get_total(&self) -> f64 {
        self.snapshot().total()
    }

    /// Sum of quantities. Zero for an empty cart.
    pub fn get_item_count(&self) -> i64 {
        self.snapshot().item_count()
    }

    /// Check if a product has a line.
    pub fn is_in_cart(&self, product_id: ProductId) -> bool {
        self.snapshot().contains(product_id)
    }

    /// Get the line for a product.
    pub fn get_item(&self, product_id: ProductId) -> Option<CartItem> {
        self.snapshot().get(product_id).cloned()
    }

    /// Load the cart, reporting storage failures to the caller.
    ///
    /// Undecodable state still reads as an empty cart; only a backend that
    /// cannot be read at all returns an error.
    pub fn load(&self) -> Result<Cart, CommerceError> {
        match self.store.get::<Vec<CartItem>>(&self.config.key) {
            Ok(items) => Ok(items.map(Cart::from_items).unwrap_or_default()),
            Err(e) => match CommerceError::from(e) {
                CommerceError::CorruptState(reason) => {
                    tracing::warn!(key = %self.config.key, %reason, "discarding corrupt cart");
                    Ok(Cart::new())
                }
                e => Err(e),
            },
        }
    }

    fn persist(&self, cart: &Cart) -> Result<(), CommerceError> {
        self.store.set(&self.config.key, cart.items())?;
        Ok(())
    }

    fn commit(&self, cart: &Cart, product_id: ProductId, change: CartChange) -> bool {
        if !change.is_effective() {
            tracing::debug!(%product_id, "cart unchanged: {}", CommerceError::NotFound(product_id));
            return false;
        }
        if let Err(e) = self.persist(cart) {
            tracing::warn!(
                key = %self.config.key,
                %product_id,
                error = %e,
                "failed to persist cart"
            );
            return false;
        }
        tracing::debug!(
            key = %self.config.key,
            %product_id,
            ?change,
            items = cart.len(),
            "cart saved"
        );
        self.notifier.notify(&CartEvent::from_cart(cart));
        true
    }
}

impl<B: StorageBackend> CartStore<B, EventBus> {
    /// Register a listener for cart changes.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&CartEvent) + Send + Sync + 'static,
    {
        self.notifier.subscribe(listener)
    }

    /// Remove a listener.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }
}
