//! # Sale Commands
//!
//! Checkout and sale history.
//!
//! ```text
//! processSale ──► Store::process_sale ──► ReceiptResponse
//!                  (validate, snapshot cart, decrement stock,
//!                   record sale, clear cart)
//! ```

use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{ConfigState, StoreState};
use omnipos_core::{Money, PaymentMethod, Sale};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptResponse {
    pub store_name: String,
    pub sale: Sale,
    pub display: ReceiptDisplay,
}

/// Pre-formatted amounts for printing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptDisplay {
    pub subtotal: String,
    pub tax: String,
    pub discount: String,
    pub total: String,
}

impl ReceiptResponse {
    fn new(config: &ConfigState, sale: Sale) -> Self {
        let display = ReceiptDisplay {
            subtotal: config.format_currency(sale.subtotal_cents),
            tax: config.format_currency(sale.tax_cents),
            discount: config.format_currency(sale.discount_cents),
            total: config.format_currency(sale.total_cents),
        };

        ReceiptResponse {
            store_name: config.store_name.clone(),
            sale,
            display,
        }
    }
}

/// Checks out the current cart.
///
/// ## Errors
/// - `EMPTY_CART`: nothing to sell, nothing changes
/// - `BUSINESS_LOGIC`: negative discount
///
/// `customer_id` is recorded as given; it is not looked up.
pub fn process_sale(
    store: &StoreState,
    config: &ConfigState,
    payment_method: PaymentMethod,
    customer_id: Option<String>,
    discount_cents: Option<i64>,
) -> Result<ReceiptResponse, ApiError> {
    debug!(
        payment_method = ?payment_method,
        customer_id = ?customer_id,
        discount = ?discount_cents,
        "process_sale command"
    );

    let discount = Money::from_cents(discount_cents.unwrap_or(0));
    let sale = store.with_store_mut(|s| {
        s.process_sale(payment_method, customer_id.as_deref(), discount)
    })?;

    info!(
        receipt = %sale.receipt_number,
        total = %config.format_currency(sale.total_cents),
        "Receipt issued"
    );

    Ok(ReceiptResponse::new(config, sale))
}

/// Lists recorded sales, newest first.
pub fn list_sales(store: &StoreState, limit: Option<usize>) -> Vec<Sale> {
    debug!(limit = ?limit, "list_sales command");

    store.with_store(|s| {
        let sales = s.sales();
        let end = limit.unwrap_or(sales.len()).min(sales.len());
        sales[..end].to_vec()
    })
}

pub fn get_sale(store: &StoreState, id: String) -> Result<Sale, ApiError> {
    debug!(id = %id, "get_sale command");

    store
        .with_store(|s| s.sale(&id).cloned())
        .ok_or_else(|| ApiError::not_found("Sale", &id))
}
