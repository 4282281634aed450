//! Payment gateway payloads.
//!
//! The backend creates a gateway order for an amount, the customer pays in the
//! gateway widget, and the widget's order id, payment id and signature are sent
//! back for verification. Only the payload shapes live here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cart::Cart;
use crate::error::CommerceError;
use crate::money::{Currency, Money};

/// Body of `POST /payments/create-order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentOrderRequest {
    /// Amount in major units (rupees); the backend converts to paise.
    pub amount: f64,
    pub currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Value>,
}

impl CreatePaymentOrderRequest {
    /// Request for an arbitrary amount in rupees.
    pub fn new(amount: f64) -> Self {
        Self {
            amount,
            currency: Currency::INR,
            receipt: None,
            notes: None,
        }
    }

    /// Request for the cart total.
    pub fn for_cart(cart: &Cart) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        Ok(Self::new(cart.total()))
    }

    /// Attach a merchant receipt reference.
    pub fn with_receipt(mut self, receipt: impl Into<String>) -> Self {
        self.receipt = Some(receipt.into());
        self
    }

    /// Attach free-form notes.
    pub fn with_notes(mut self, notes: Value) -> Self {
        self.notes = Some(notes);
        self
    }

    /// Set the currency.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Amount as money, for display and minor-unit conversion.
    pub fn money(&self) -> Money {
        Money::from_decimal(self.amount, self.currency)
    }
}

/// Gateway order created by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentOrder {
    pub id: String,
    /// Amount in minor units, as the gateway reports it.
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub receipt: String,
}

/// Response of `POST /payments/create-order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentOrderResponse {
    pub success: bool,
    pub order: PaymentOrder,
}

/// Body of `POST /payments/verify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentVerificationData {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
    /// Our order id the payment settles.
    pub order_id: String,
}

/// Response of `POST /payments/verify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentVerificationResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
}

/// Body of `POST /payments/refund`. No amount means a full refund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundRequest {
    pub payment_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Value>,
}

impl RefundRequest {
    /// Refund the whole payment.
    pub fn full(payment_id: impl Into<String>) -> Self {
        Self {
            payment_id: payment_id.into(),
            amount: None,
            notes: None,
        }
    }

    /// Refund part of the payment.
    pub fn partial(payment_id: impl Into<String>, amount: f64) -> Self {
        Self {
            amount: Some(amount),
            ..Self::full(payment_id)
        }
    }
}
