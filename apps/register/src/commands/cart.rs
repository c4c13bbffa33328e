//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│   Sale   │       │
//! │  │  Cart    │     │          │     │          │     │ recorded │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart       process_sale                       │
//! │                   update_item       (sale.rs)                          │
//! │                   remove_item                                           │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command answers with the whole cart so the UI can re-render from a
//! single response.

use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::StoreState;
use omnipos_core::{CartItem, CartTotals, Money, StockShortfall, Store};

/// Cart response including items, totals and stock warnings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
    /// Lines asking for more than is on hand. Checkout still goes through.
    pub shortfalls: Vec<StockShortfall>,
}

impl From<&Store> for CartResponse {
    fn from(store: &Store) -> Self {
        CartResponse {
            items: store.cart().items().to_vec(),
            totals: store.cart_totals(Money::zero()),
            shortfalls: store.cart_shortfalls(),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(store: &StoreState) -> CartResponse {
    debug!("get_cart command");
    store.with_store(|s| CartResponse::from(s))
}

/// Adds one unit of a catalog product to the cart.
///
/// ## Behavior
/// - Already in cart: quantity increases by one
/// - Not in cart: added with quantity one, price frozen at this moment
/// - Unknown product id: `NOT_FOUND`, cart unchanged
/// - Line already at 999 units, or a new line past 100: error, cart unchanged
pub fn add_to_cart(store: &StoreState, product_id: String) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    store.with_store_mut(|s| {
        s.add_product_to_cart(&product_id)?;
        Ok(CartResponse::from(&*s))
    })
}

/// Sets the quantity of a cart line.
///
/// Zero or less removes the line. A product that is not in the cart is
/// ignored. Above 999 is a `VALIDATION_ERROR` and the cart is unchanged.
pub fn update_cart_item(
    store: &StoreState,
    product_id: String,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, quantity, "update_cart_item command");

    store.with_store_mut(|s| {
        s.update_cart_quantity(&product_id, quantity)?;
        Ok(CartResponse::from(&*s))
    })
}

/// Removes a line from the cart. Unknown ids are ignored.
pub fn remove_from_cart(store: &StoreState, product_id: String) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    store.with_store_mut(|s| {
        s.remove_from_cart(&product_id);
        CartResponse::from(&*s)
    })
}

pub fn clear_cart(store: &StoreState) -> CartResponse {
    debug!("clear_cart command");

    store.with_store_mut(|s| {
        s.clear_cart();
        CartResponse::from(&*s)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn product_id(store: &StoreState, sku: &str) -> String {
        store.with_store(|s| {
            s.products()
                .iter()
                .find(|p| p.sku == sku)
                .map(|p| p.id.clone())
                .unwrap()
        })
    }

    #[test]
    fn test_add_and_update() {
        let store = StoreState::default();
        let coffee = product_id(&store, "GROC001");

        add_to_cart(&store, coffee.clone()).unwrap();
        let cart = add_to_cart(&store, coffee.clone()).unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.totals.total_quantity, 2);
        assert_eq!(cart.totals.subtotal_cents, 4800);

        let cart = update_cart_item(&store, coffee, 0).unwrap();
        assert!(cart.items.is_empty());
    }

    #[test]
    fn test_add_unknown_product() {
        let store = StoreState::default();
        let err = add_to_cart(&store, "missing".to_string()).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(get_cart(&store).items.is_empty());
    }

    #[test]
    fn test_shortfall_reported_for_oversized_line() {
        let store = StoreState::default();
        let olive_oil = product_id(&store, "GROC002");

        add_to_cart(&store, olive_oil.clone()).unwrap();
        let cart = update_cart_item(&store, olive_oil, 3).unwrap();

        assert_eq!(cart.shortfalls.len(), 1);
        assert_eq!(cart.shortfalls[0].available, 2);
        assert_eq!(cart.shortfalls[0].requested, 3);
    }

    #[test]
    fn test_remove_and_clear() {
        let store = StoreState::default();
        let mouse = product_id(&store, "ACC002");
        let charger = product_id(&store, "ACC001");

        add_to_cart(&store, mouse.clone()).unwrap();
        add_to_cart(&store, charger).unwrap();

        assert_eq!(remove_from_cart(&store, mouse.clone()).items.len(), 1);
        // removing again is a no-op
        assert_eq!(remove_from_cart(&store, mouse).items.len(), 1);
        assert!(clear_cart(&store).items.is_empty());
    }

    #[test]
    fn test_oversized_quantity_is_rejected() {
        let store = StoreState::default();
        let coffee = product_id(&store, "GROC001");
        add_to_cart(&store, coffee.clone()).unwrap();

        let err = update_cart_item(&store, coffee.clone(), i64::MAX / 2).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let cart = get_cart(&store);
        assert_eq!(cart.totals.total_quantity, 1);
        assert_eq!(cart.totals.subtotal_cents, 2400);
        assert_eq!(update_cart_item(&store, coffee, 999).unwrap().totals.total_quantity, 999);
    }
}
