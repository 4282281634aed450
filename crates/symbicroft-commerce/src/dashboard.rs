//! Admin dashboard figures.
//!
//! The dashboard endpoints already answer in the `{ success, data }` envelope,
//! so their responses deserialize directly.

use serde::{Deserialize, Serialize};

use crate::ids::ProductId;
use crate::response::ItemResponse;

/// Default window for the sales chart, in days.
pub const DEFAULT_SALES_DAYS: u32 = 30;

/// Default length of the top-products table.
pub const DEFAULT_TOP_PRODUCTS: u32 = 5;

/// Headline counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_products: i64,
    pub total_orders: i64,
    pub pending_orders: i64,
    pub total_revenue: f64,
    pub total_articles: i64,
}

impl DashboardStats {
    /// Revenue per order, zero before the first order.
    pub fn average_order_value(&self) -> f64 {
        if self.total_orders <= 0 {
            return 0.0;
        }
        self.total_revenue / self.total_orders as f64
    }
}

/// One day of the sales chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesData {
    pub date: String,
    pub total_sales: f64,
    pub order_count: i64,
}

/// A best-selling product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub product_id: ProductId,
    pub product_name: String,
    pub total_quantity: i64,
    pub total_revenue: f64,
}

pub type DashboardStatsResponse = ItemResponse<DashboardStats>;
pub type SalesDataResponse = ItemResponse<Vec<SalesData>>;
pub type TopProductsResponse = ItemResponse<Vec<TopProduct>>;

/// Total sales and orders over a chart window.
pub fn sales_totals(days: &[SalesData]) -> (f64, i64) {
    days.iter().fold((0.0, 0), |(sales, orders), day| {
        (sales + day.total_sales, orders + day.order_count)
    })
}

/// Backend paths for the dashboard.
pub mod endpoints {
    pub const STATS: &str = "/dashboard/stats";

    /// `/dashboard/sales?days={days}`
    pub fn sales(days: u32) -> String {
        format!("/dashboard/sales?days={days}")
    }

    /// `/dashboard/top-products?limit={limit}`
    pub fn top_products(limit: u32) -> String {
        format!("/dashboard/top-products?limit={limit}")
    }
}
