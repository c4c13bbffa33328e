//! # Report Commands
//!
//! Read-only views over recorded sales and the catalog.

use serde::Serialize;
use tracing::debug;

use crate::state::{ConfigState, StoreState};
use omnipos_core::reports::{self, CategorySales, DashboardStats, ProductSales};
use omnipos_core::Sale;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    /// Cost value of everything on hand.
    pub inventory_value_cents: i64,
    pub recent_sales: Vec<Sale>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReportResponse {
    pub by_category: Vec<CategorySales>,
    pub best_sellers: Vec<ProductSales>,
}

pub fn dashboard(store: &StoreState, config: &ConfigState) -> DashboardResponse {
    debug!("dashboard command");

    store.with_store(|s| DashboardResponse {
        stats: reports::dashboard_stats(s.sales(), s.products()),
        inventory_value_cents: reports::inventory_value(s.products()).cents(),
        recent_sales: reports::recent_sales(s.sales(), config.recent_sales_limit).to_vec(),
    })
}

pub fn sales_report(store: &StoreState, config: &ConfigState) -> SalesReportResponse {
    debug!("sales_report command");

    store.with_store(|s| SalesReportResponse {
        by_category: reports::sales_by_category(s.sales()),
        best_sellers: reports::best_sellers(s.sales(), config.best_sellers_limit),
    })
}
