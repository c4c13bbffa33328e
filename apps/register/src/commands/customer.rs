//! # Customer Commands
//!
//! The customer registry. Customers are never deleted; checkout does not
//! consult the registry.

use tracing::debug;

use crate::error::ApiError;
use crate::state::StoreState;
use omnipos_core::validation::validate_search_query;
use omnipos_core::{CoreError, Customer, NewCustomer};

/// Searches customers by name (case-insensitive) or phone number.
pub fn search_customers(store: &StoreState, query: String) -> Result<Vec<Customer>, ApiError> {
    debug!(query = %query, "search_customers command");

    let query = validate_search_query(&query)
        .map_err(|e| ApiError::validation(e.to_string()))?;

    Ok(store.with_store(|s| s.search_customers(&query).into_iter().cloned().collect()))
}

pub fn get_customer(store: &StoreState, id: String) -> Result<Customer, ApiError> {
    debug!(id = %id, "get_customer command");

    store
        .with_store(|s| s.customer(&id).cloned())
        .ok_or_else(|| ApiError::from(CoreError::unknown_customer(id)))
}

pub fn add_customer(store: &StoreState, customer: NewCustomer) -> Result<Customer, ApiError> {
    debug!(name = %customer.name, "add_customer command");

    let customer = store.with_store_mut(|s| s.add_customer(customer).cloned())?;
    Ok(customer)
}

/// Replaces a customer by id. Unknown ids are `NOT_FOUND`.
pub fn update_customer(store: &StoreState, customer: Customer) -> Result<Customer, ApiError> {
    debug!(id = %customer.id, "update_customer command");

    let id = customer.id.clone();
    store
        .with_store_mut(|s| s.update_customer(customer).map(|c| c.cloned()))?
        .ok_or_else(|| ApiError::from(CoreError::unknown_customer(id)))
}
