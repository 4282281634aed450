//! Cart line item.

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::format::LineAmount;
use crate::ids::ProductId;

/// One product line in the cart.
///
/// Field names match the persisted JSON layout, so carts written by older
/// storefront builds load unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product being purchased. Unique within a cart.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub product_name: String,
    /// Unit price at the time the item was added.
    pub product_price: f64,
    /// Number of units. Always positive for an item held in a cart.
    pub quantity: i64,
    /// Uploaded image path, display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    /// Stock level seen when added, display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,
}

impl CartItem {
    /// Create a line item without display extras.
    pub fn new(
        product_id: ProductId,
        product_name: impl Into<String>,
        product_price: f64,
        quantity: i64,
    ) -> Self {
        Self {
            product_id,
            product_name: product_name.into(),
            product_price,
            quantity,
            image_path: None,
            stock_quantity: None,
        }
    }

    /// Attach an image path.
    pub fn with_image(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = Some(image_path.into());
        self
    }

    /// Attach the observed stock level.
    pub fn with_stock(mut self, stock_quantity: i64) -> Self {
        self.stock_quantity = Some(stock_quantity);
        self
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> f64 {
        self.product_price * self.quantity as f64
    }

    /// Check the values a cart accepts on add.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(self.quantity));
        }
        if !self.product_price.is_finite() || self.product_price < 0.0 {
            return Err(CommerceError::InvalidPrice(self.product_price));
        }
        Ok(())
    }
}

impl LineAmount for CartItem {
    fn amount(&self) -> f64 {
        self.line_total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_omitted() {
        let item = CartItem::new(ProductId::new(1), "Masala", 100.0, 2);
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"product_id":1,"product_name":"Masala","product_price":100.0,"quantity":2}"#
        );
    }

    #[test]
    fn test_reads_stored_layout() {
        let json = r#"{"product_id":3,"product_name":"Chai","product_price":45.5,"quantity":1,"image_path":"chai.png","stock_quantity":12}"#;
        let item: CartItem = serde_json::from_str(json).unwrap();
        let expected = CartItem::new(ProductId::new(3), "Chai", 45.5, 1)
            .with_image("chai.png")
            .with_stock(12);
        assert_eq!(item, expected);
    }

    #[test]
    fn test_line_total() {
        assert_eq!(CartItem::new(ProductId::new(1), "Masala", 100.0, 5).line_total(), 500.0);
    }

    #[test]
    fn test_validate() {
        assert!(CartItem::new(ProductId::new(1), "A", 0.0, 1).validate().is_ok());
        assert!(matches!(
            CartItem::new(ProductId::new(1), "A", 10.0, 0).validate(),
            Err(CommerceError::InvalidQuantity(0))
        ));
        assert!(matches!(
            CartItem::new(ProductId::new(1), "A", -1.0, 1).validate(),
            Err(CommerceError::InvalidPrice(_))
        ));
        assert!(CartItem::new(ProductId::new(1), "A", f64::NAN, 1).validate().is_err());
    }
}
