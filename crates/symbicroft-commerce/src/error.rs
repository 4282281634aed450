//! Commerce error types.

use thiserror::Error;

use crate::ids::ProductId;

/// Errors that can occur in cart and checkout operations.
///
/// The cart store absorbs every variant it produces (logging it instead);
/// checkout builders return them to the caller.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    NotFound(ProductId),

    /// Persisted cart could not be decoded.
    #[error("Corrupt cart state: {0}")]
    CorruptState(String),

    /// Storage is not reachable in this execution context.
    #[error("Storage unavailable: {0}")]
    EnvironmentUnavailable(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Invalid unit price.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Unknown order status string.
    #[error("Unknown order status: {0}")]
    UnknownStatus(String),

    /// Storage error other than unavailability or corruption.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<symbicroft_store::StoreError> for CommerceError {
    fn from(e: symbicroft_store::StoreError) -> Self {
        use symbicroft_store::StoreError;
        match e {
            StoreError::Unavailable(reason) => CommerceError::EnvironmentUnavailable(reason),
            StoreError::Corrupt { key, reason } => {
                CommerceError::CorruptState(format!("{key}: {reason}"))
            }
            other => CommerceError::Storage(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}
