//! Pure cart collection.

use serde::{Deserialize, Serialize};

use crate::cart::CartItem;
use crate::format::calculate_total;
use crate::ids::ProductId;

/// Outcome of a cart mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    /// A new line was appended.
    Added,
    /// An existing line's quantity grew to the contained value.
    Incremented(i64),
    /// An existing line's quantity was set to the contained value.
    QuantitySet(i64),
    /// A line was dropped.
    Removed,
    /// Nothing matched; the cart is as it was.
    Unchanged,
}

impl CartChange {
    /// Whether the mutation altered the cart.
    pub fn is_effective(self) -> bool {
        self != CartChange::Unchanged
    }
}

/// Ordered cart items, at most one per product.
///
/// Serializes as a bare JSON array of items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from raw items.
    ///
    /// Duplicate product lines are merged into the first occurrence and lines
    /// with a non-positive quantity are dropped, so the result always holds
    /// the cart invariants even when the source did not.
    pub fn from_items(items: impl IntoIterator<Item = CartItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if item.quantity > 0 {
                cart.add(item);
            }
        }
        cart
    }

    /// Add an item.
    ///
    /// An existing line for the same product keeps its name and price and has
    /// its quantity increased by `item.quantity`. Otherwise the item is appended.
    pub fn add(&mut self, item: CartItem) -> CartChange {
        match self.position(item.product_id) {
            Some(idx) => {
                let existing = &mut self.items[idx];
                existing.quantity = existing.quantity.saturating_add(item.quantity);
                CartChange::Incremented(existing.quantity)
            }
            None => {
                self.items.push(item);
                CartChange::Added
            }
        }
    }

    /// Set a line's quantity. Zero or below removes the line.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) -> CartChange {
        let Some(idx) = self.position(product_id) else {
            return CartChange::Unchanged;
        };
        if quantity <= 0 {
            self.items.remove(idx);
            CartChange::Removed
        } else {
            self.items[idx].quantity = quantity;
            CartChange::QuantitySet(quantity)
        }
    }

    /// Drop the line for a product.
    pub fn remove(&mut self, product_id: ProductId) -> CartChange {
        match self.position(product_id) {
            Some(idx) => {
                self.items.remove(idx);
                CartChange::Removed
            }
            None => CartChange::Unchanged,
        }
    }

    /// Sum of price times quantity over all lines.
    pub fn total(&self) -> f64 {
        calculate_total(&self.items)
    }

    /// Sum of quantities over all lines.
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |count, item| count.saturating_add(item.quantity))
    }

    /// Check if a product has a line.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.position(product_id).is_some()
    }

    /// Get the line for a product.
    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Consume into the lines.
    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.items.iter().position(|i| i.product_id == product_id)
    }
}

impl From<Vec<CartItem>> for Cart {
    fn from(items: Vec<CartItem>) -> Self {
        Self::from_items(items)
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}
