//! Shopping cart module.
//!
//! [`Cart`] is the pure collection with the merge/replace/remove rules.
//! [`CartStore`] persists it under one storage key and broadcasts a
//! [`CartEvent`] after every mutation.

mod cart;
mod events;
mod item;
mod store;

pub use cart::{Cart, CartChange};
pub use events::{CartEvent, CartNotifier, EventBus, NoopNotifier, SubscriptionId, CART_UPDATED};
pub use item::CartItem;
pub use store::{CartConfig, CartStore, CART_KEY};
