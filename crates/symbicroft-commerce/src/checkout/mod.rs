//! Checkout payloads.
//!
//! Request and response shapes for the order and payment endpoints, and the
//! builders that turn a cart into them. Transport is left to the caller.

pub mod order;
pub mod payment;

pub use order::{
    status_class, CreateOrderData, CreateOrderItem, CustomerDetails, Order, OrderItem,
    OrderResponse, OrderStats, OrderStatus, OrdersResponse,
};
pub use payment::{
    CreatePaymentOrderRequest, PaymentOrder, PaymentOrderResponse, PaymentVerificationData,
    PaymentVerificationResponse, RefundRequest,
};

/// Backend paths used by the checkout flow.
pub mod endpoints {
    use crate::ids::OrderId;

    pub const ORDERS: &str = "/orders";
    pub const ORDER_STATS: &str = "/orders/stats/summary";
    pub const PAYMENT_CREATE_ORDER: &str = "/payments/create-order";
    pub const PAYMENT_VERIFY: &str = "/payments/verify";
    pub const PAYMENT_REFUND: &str = "/payments/refund";

    /// `/orders/{id}`
    pub fn order(id: OrderId) -> String {
        format!("{ORDERS}/{id}")
    }

    /// `/orders/{id}/status`
    pub fn order_status(id: OrderId) -> String {
        format!("{ORDERS}/{id}/status")
    }

    /// `/payments/{payment_id}`
    pub fn payment(payment_id: &str) -> String {
        format!("/payments/{payment_id}")
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_paths() {
            assert_eq!(order(OrderId::new(7)), "/orders/7");
            assert_eq!(order_status(OrderId::new(7)), "/orders/7/status");
            assert_eq!(payment("pay_123"), "/payments/pay_123");
        }
    }
}
