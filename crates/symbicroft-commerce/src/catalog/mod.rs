//! Product catalog module.
//!
//! Products and categories as the admin backend serves them.

mod category;
mod product;

pub use category::{
    CategoriesResponse, Category, CategoryResponse, CreateCategoryData, UpdateCategoryData,
};
pub use product::{
    CreateProductData, Product, ProductResponse, ProductStatus, ProductsResponse,
    UpdateProductData,
};

/// Backend paths for products and categories.
pub mod endpoints {
    use crate::ids::{CategoryId, ProductId};

    pub const PRODUCTS: &str = "/products";
    pub const CATEGORIES: &str = "/categories";

    /// `/products/{id}`
    pub fn product(id: ProductId) -> String {
        format!("{PRODUCTS}/{id}")
    }

    /// `/products/{id}/image`, multipart field `image`.
    pub fn product_image(id: ProductId) -> String {
        format!("{PRODUCTS}/{id}/image")
    }

    /// `/categories/{id}`
    pub fn category(id: CategoryId) -> String {
        format!("{CATEGORIES}/{id}")
    }

    /// `/categories/{id}/products`
    pub fn category_products(id: CategoryId) -> String {
        format!("{CATEGORIES}/{id}/products")
    }

}
