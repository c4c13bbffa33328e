//! # Product Commands
//!
//! Catalog lookup and maintenance.
//!
//! ## Search Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Search                                       │
//! │                                                                         │
//! │  Query: "coffee"                                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │  Case-insensitive substring on          │                           │
//! │  │  name, sku and category                 │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Catalog order preserved                                               │
//! │                                                                         │
//! │  Empty query returns the whole catalog                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Edits never touch past sales: a sale carries its own copy of every
//! product it sold.

use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::StoreState;
use omnipos_core::validation::validate_search_query;
use omnipos_core::{CoreError, NewProduct, Product};

/// Searches the catalog by name, SKU or category.
pub fn search_products(store: &StoreState, query: String) -> Result<Vec<Product>, ApiError> {
    debug!(query = %query, "search_products command");

    let query = validate_search_query(&query)
        .map_err(|e| ApiError::validation(e.to_string()))?;

    let products: Vec<Product> =
        store.with_store(|s| s.search_products(&query).into_iter().cloned().collect());

    debug!(count = products.len(), "Products found");
    Ok(products)
}

pub fn get_product(store: &StoreState, id: String) -> Result<Product, ApiError> {
    debug!(id = %id, "get_product command");

    store
        .with_store(|s| s.product(&id).cloned())
        .ok_or_else(|| ApiError::from(CoreError::unknown_product(id)))
}

/// Products whose stock is below their reorder threshold.
pub fn low_stock_products(store: &StoreState) -> Vec<Product> {
    debug!("low_stock_products command");
    store.with_store(|s| s.low_stock_products().into_iter().cloned().collect())
}

/// Adds a product; the register assigns its id.
pub fn add_product(store: &StoreState, product: NewProduct) -> Result<Product, ApiError> {
    debug!(sku = %product.sku, "add_product command");

    let product = store.with_store_mut(|s| s.add_product(product).cloned())?;
    Ok(product)
}

/// Replaces a product by id.
///
/// An unknown id is `NOT_FOUND` and the catalog is left as it was.
pub fn update_product(store: &StoreState, product: Product) -> Result<Product, ApiError> {
    debug!(id = %product.id, "update_product command");

    let id = product.id.clone();
    store
        .with_store_mut(|s| s.update_product(product).map(|p| p.cloned()))?
        .ok_or_else(|| ApiError::from(CoreError::unknown_product(id)))
}

/// Deletes a product and returns what was removed.
pub fn delete_product(store: &StoreState, id: String) -> Result<Product, ApiError> {
    debug!(id = %id, "delete_product command");

    let removed = store
        .with_store_mut(|s| s.delete_product(&id))
        .ok_or_else(|| ApiError::from(CoreError::unknown_product(id)))?;

    info!(id = %removed.id, name = %removed.name, "Product removed from catalog");
    Ok(removed)
}
