//! Orders: status, payloads, and response normalization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cart::Cart;
use crate::error::CommerceError;
use crate::format::{calculate_total, is_valid_email, is_valid_phone, LineAmount};
use crate::ids::{OrderId, ProductId};
use crate::response::{ItemResponse, ListResponse, MessageResponse, Resource};

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Badge classes for the admin order table.
    pub fn badge_class(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "bg-orange-500/20 text-orange-400",
            OrderStatus::Processing => "bg-blue-500/20 text-blue-400",
            OrderStatus::Shipped => "bg-purple-500/20 text-purple-400",
            OrderStatus::Delivered => "bg-green-500/20 text-green-400",
            OrderStatus::Cancelled => "bg-red-500/20 text-red-400",
        }
    }

    /// Whether no further transitions are expected.
    pub fn is_final(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == lower)
            .ok_or_else(|| CommerceError::UnknownStatus(s.to_string()))
    }
}

/// Badge classes for any status string, gray when unrecognized.
pub fn status_class(status: &str) -> &'static str {
    status
        .parse::<OrderStatus>()
        .map(|s| s.badge_class())
        .unwrap_or("bg-gray-500/20 text-gray-400")
}

/// A line on a placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: i64,
    pub price: f64,
}

impl LineAmount for OrderItem {
    fn amount(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// A placed order as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub shipping_address: String,
    pub total_amount: f64,
    pub status: OrderStatus,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub created_at: String,
    pub updated_at: String,
}

impl Order {
    /// Sum of price times quantity over the order lines.
    pub fn items_total(&self) -> f64 {
        calculate_total(&self.items)
    }
}

/// Who is ordering and where it ships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub shipping_address: String,
}

impl CustomerDetails {
    /// Check every field, reporting the first problem found.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.customer_name.trim().is_empty() {
            return Err(CommerceError::Validation("name is required".to_string()));
        }
        if !is_valid_email(&self.customer_email) {
            return Err(CommerceError::Validation(format!(
                "invalid email: {}",
                self.customer_email
            )));
        }
        if !is_valid_phone(&self.customer_phone) {
            return Err(CommerceError::Validation(format!(
                "invalid phone: {}",
                self.customer_phone
            )));
        }
        if self.shipping_address.trim().is_empty() {
            return Err(CommerceError::Validation(
                "shipping address is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// One line of an order request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderItem {
    pub product_id: ProductId,
    pub quantity: i64,
    pub price: f64,
}

impl LineAmount for CreateOrderItem {
    fn amount(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Body of `POST /orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderData {
    #[serde(flatten)]
    pub customer: CustomerDetails,
    pub items: Vec<CreateOrderItem>,
}

impl CreateOrderData {
    /// Build an order request from the cart contents.
    pub fn from_cart(customer: CustomerDetails, cart: &Cart) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        customer.validate()?;

        let items = cart
            .items()
            .iter()
            .map(|item| CreateOrderItem {
                product_id: item.product_id,
                quantity: item.quantity,
                price: item.product_price,
            })
            .collect();

        Ok(Self { customer, items })
    }

    /// Sum of price times quantity over the request lines.
    pub fn total(&self) -> f64 {
        calculate_total(&self.items)
    }
}

/// Dashboard order summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStats {
    pub total_orders: i64,
    pub pending_orders: i64,
    pub total_revenue: f64,
    #[serde(default)]
    pub recent_orders: Vec<Order>,
}

impl Resource for Order {
    const ONE: &'static str = "order";
    const MANY: &'static str = "orders";
    const DELETED: &'static str = "Order deleted successfully";
}

/// Normalized order list.
pub type OrdersResponse = ListResponse<Order>;

/// Normalized single order.
pub type OrderResponse = ItemResponse<Order>;

impl MessageResponse {
    /// Result of `PUT /orders/{id}/status`.
    pub fn status_updated(body: &Value) -> Self {
        Self::from_backend(body, "Order status updated successfully")
    }
}
