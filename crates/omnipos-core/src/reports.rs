//! # Reports
//!
//! Read-only aggregation over the sales history and catalog, feeding the
//! dashboard and report screens.
//!
//! ```text
//! sales (newest first) ──┬──► dashboard_stats    revenue, profit, orders
//!                        ├──► sales_by_category  revenue per category
//!                        ├──► best_sellers       units per product name
//!                        └──► recent_sales       first N
//! products ──────────────┬──► dashboard_stats    low stock count
//!                        └──► inventory_value    Σ cost × stock
//! ```
//!
//! All figures come from the frozen sale lines, so they do not move when the
//! catalog is edited afterwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, Sale};

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Σ sale totals (after tax and discount).
    pub total_sales_cents: i64,
    /// Σ (sale subtotal − cost of goods sold).
    pub total_profit_cents: i64,
    pub total_orders: usize,
    pub low_stock_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CategorySales {
    pub category: String,
    pub revenue_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductSales {
    pub name: String,
    pub quantity: i64,
}

pub fn dashboard_stats(sales: &[Sale], products: &[Product]) -> DashboardStats {
    let total_sales: Money = sales.iter().map(Sale::total).sum();
    let total_profit: Money = sales
        .iter()
        .map(|s| Money::from_cents(s.subtotal_cents) - s.cost())
        .sum();

    DashboardStats {
        total_sales_cents: total_sales.cents(),
        total_profit_cents: total_profit.cents(),
        total_orders: sales.len(),
        low_stock_count: products.iter().filter(|p| p.is_low_stock()).count(),
    }
}

/// What the stock on hand cost the store. Negative stock counts against it.
///
/// Summed in `i128` and clamped, since a large catalog at the price and
/// stock limits can exceed `i64`.
pub fn inventory_value(products: &[Product]) -> Money {
    let total: i128 = products
        .iter()
        .map(|p| i128::from(p.purchase_price_cents) * i128::from(p.stock))
        .sum();
    Money::from_cents(total.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
}

/// Pre-tax revenue per category, ordered by category name.
pub fn sales_by_category(sales: &[Sale]) -> Vec<CategorySales> {
    let mut by_category: BTreeMap<&str, Money> = BTreeMap::new();
    for item in sales.iter().flat_map(|s| &s.items) {
        *by_category.entry(item.category.as_str()).or_default() += item.line_total();
    }

    by_category
        .into_iter()
        .map(|(category, revenue)| CategorySales {
            category: category.to_string(),
            revenue_cents: revenue.cents(),
        })
        .collect()
}

/// Units sold per product name, highest first, ties broken by name.
pub fn best_sellers(sales: &[Sale], limit: usize) -> Vec<ProductSales> {
    let mut by_name: BTreeMap<&str, i64> = BTreeMap::new();
    for item in sales.iter().flat_map(|s| &s.items) {
        *by_name.entry(item.name.as_str()).or_default() += item.quantity;
    }

    let mut ranked: Vec<ProductSales> = by_name
        .into_iter()
        .map(|(name, quantity)| ProductSales {
            name: name.to_string(),
            quantity,
        })
        .collect();
    // stable sort keeps the BTreeMap's name order within equal quantities
    ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    ranked.truncate(limit);
    ranked
}

/// The newest `limit` sales. Expects history in most-recent-first order.
pub fn recent_sales(sales: &[Sale], limit: usize) -> &[Sale] {
    &sales[..limit.min(sales.len())]
}
