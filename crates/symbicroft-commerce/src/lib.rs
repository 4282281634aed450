//! Cart, checkout and storefront helpers for Symbicroft.
//!
//! - **Cart**: the persisted client-side cart with change broadcasts
//! - **Checkout**: order and payment payloads built from a cart
//! - **Catalog**: products and categories
//! - **Articles**, **Dashboard**, **Auth**: the remaining admin resources
//! - **Format**: price, date, stock and upload helpers for the UI
//!
//! # Example
//!
//! ```rust,ignore
//! use symbicroft_commerce::prelude::*;
//! use symbicroft_store::MemoryStorage;
//!
//! let cart = CartStore::new(MemoryStorage::new(), EventBus::new());
//! cart.subscribe(|event| println!("badge: {}", event.item_count()));
//!
//! cart.add_item(CartItem::new(ProductId::new(1), "Masala", 100.0, 2));
//! cart.add_item(CartItem::new(ProductId::new(1), "Masala", 100.0, 3));
//! assert_eq!(cart.get_total(), 500.0);
//!
//! let payment = CreatePaymentOrderRequest::for_cart(&cart.snapshot())?;
//! ```

pub mod error;
pub mod format;
pub mod ids;
pub mod money;
pub mod response;

pub mod article;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod dashboard;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};
pub use response::{ItemResponse, ListResponse, MessageResponse, Resource};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Cart
    pub use crate::cart::{
        Cart, CartChange, CartConfig, CartEvent, CartItem, CartNotifier, CartStore, EventBus,
        NoopNotifier, SubscriptionId, CART_KEY, CART_UPDATED,
    };

    // Checkout
    pub use crate::checkout::{
        CreateOrderData, CreatePaymentOrderRequest, CustomerDetails, Order, OrderStatus,
        PaymentVerificationData,
    };

    // Catalog and admin resources
    pub use crate::article::{Article, CreateArticleData};
    pub use crate::auth::{AuthSession, AUTH_TOKEN_KEY};
    pub use crate::catalog::{Category, CreateProductData, Product, ProductStatus};
    pub use crate::dashboard::{DashboardStats, SalesData, TopProduct};
    pub use crate::response::{ItemResponse, ListResponse, MessageResponse};
}
