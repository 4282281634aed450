//! Product records and admin payloads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cart::CartItem;
use crate::error::CommerceError;
use crate::format::{image_url, is_in_stock, stock_status};
use crate::ids::{CategoryId, ProductId};
use crate::response::{ItemResponse, ListResponse, Resource};

/// Product visibility status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Listed in the storefront.
    #[default]
    Active,
    /// Hidden from the storefront, data kept.
    Inactive,
    /// Not yet published.
    Draft,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Inactive => "inactive",
            ProductStatus::Draft => "draft",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductStatus {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(ProductStatus::Active),
            "inactive" => Ok(ProductStatus::Inactive),
            "draft" => Ok(ProductStatus::Draft),
            _ => Err(CommerceError::UnknownStatus(s.to_string())),
        }
    }
}

/// A product as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Backend row id.
    pub id: ProductId,
    /// Merchant-facing product code (SKU).
    pub product_id: String,
    pub name: String,
    #[serde(default)]
    pub short_description: String,
    /// Full description, may contain HTML.
    #[serde(default)]
    pub long_description: String,
    pub price: f64,
    pub stock_quantity: i64,
    pub category_id: CategoryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_slug: Option<String>,
    /// Path relative to the uploads root.
    #[serde(default)]
    pub image_path: Option<String>,
    /// Raw status string; see [`Product::status`].
    pub status: String,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,
    pub created_at: String,
    pub updated_at: String,
}

impl Product {
    /// Parsed status, `None` for values this client does not know.
    pub fn status(&self) -> Option<ProductStatus> {
        self.status.parse().ok()
    }

    /// Check if the product is listed and has stock.
    pub fn is_available(&self) -> bool {
        self.status() == Some(ProductStatus::Active) && self.is_in_stock()
    }

    pub fn is_in_stock(&self) -> bool {
        is_in_stock(self.stock_quantity)
    }

    /// Customer-facing stock label.
    pub fn stock_status(&self) -> String {
        stock_status(self.stock_quantity)
    }

    /// Image URL under `uploads_url`, or the placeholder.
    pub fn image_url(&self, uploads_url: &str) -> String {
        image_url(uploads_url, self.image_path.as_deref())
    }

    /// Cart line for `quantity` units at the current price.
    pub fn to_cart_item(&self, quantity: i64) -> CartItem {
        let mut item = CartItem::new(self.id, self.name.clone(), self.price, quantity)
            .with_stock(self.stock_quantity);
        item.image_path = self.image_path.clone();
        item
    }
}

impl Resource for Product {
    const ONE: &'static str = "product";
    const MANY: &'static str = "products";
    const DELETED: &'static str = "Product deleted successfully";
}

/// Normalized product list.
pub type ProductsResponse = ListResponse<Product>;

/// Normalized single product.
pub type ProductResponse = ItemResponse<Product>;

/// Body of `POST /products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProductData {
    pub product_id: String,
    pub name: String,
    pub short_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    pub price: f64,
    pub stock_quantity: i64,
    pub category_id: CategoryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,
}

impl CreateProductData {
    /// Check the fields the admin form requires.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.product_id.trim().is_empty() {
            return Err(CommerceError::Validation("product code is required".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(CommerceError::Validation("product name is required".to_string()));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(CommerceError::InvalidPrice(self.price));
        }
        if self.stock_quantity < 0 {
            return Err(CommerceError::InvalidQuantity(self.stock_quantity));
        }
        Ok(())
    }
}

/// Body of `PUT /products/{id}`. Only set fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateProductData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<Vec<String>>,
}

impl UpdateProductData {
    /// Whether the update would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
