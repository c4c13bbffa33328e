//! # Cart
//!
//! The ephemeral shopping cart of the active transaction.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action                Store Operation         Cart Change           │
//! │  ─────────                ───────────────         ───────────           │
//! │                                                                         │
//! │  Click Product ──────────► add_to_cart() ───────► qty += 1 or push     │
//! │                                                                         │
//! │  Change Quantity ────────► update_cart_qty() ───► qty = n (n<=0: drop) │
//! │                                                                         │
//! │  Click Remove ───────────► remove_from_cart() ──► items.retain(..)     │
//! │                                                                         │
//! │  Click Clear / Checkout ─► clear_cart() ────────► items.clear()        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No stock checks happen here. A cart line may ask for more units than are
//! on hand; see [`crate::store::Store::cart_shortfalls`].
//!
//! ## Limits
//! A line holds at most [`MAX_ITEM_QUANTITY`] units and a cart at most
//! [`MAX_CART_ITEMS`] lines. Both are checked before the cart changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY, TAX_RATE};

/// An item in the shopping cart.
///
/// Holds an owned copy of the product's descriptive and price fields taken
/// when the product was first added. Later catalog edits do not reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    pub sku: String,
    pub name: String,
    pub category: String,
    pub supplier: String,
    /// Unit cost when added (frozen).
    pub purchase_price_cents: i64,
    /// Unit price when added (frozen).
    pub selling_price_cents: i64,
    /// Always > 0.
    pub quantity: i64,
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Snapshots `product` into a new cart line with the given quantity.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartItem {
            product_id: product.id.clone(),
            sku: product.sku.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            supplier: product.supplier.clone(),
            purchase_price_cents: product.purchase_price_cents,
            selling_price_cents: product.selling_price_cents,
            quantity,
            added_at: Utc::now(),
        }
    }

    #[inline]
    pub fn selling_price(&self) -> Money {
        Money::from_cents(self.selling_price_cents)
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.selling_price().multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `product_id` (adding the same product bumps quantity)
/// - Every quantity is > 0 (setting 0 or less removes the line)
/// - Insertion order is preserved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,

    /// When the cart was created or last cleared.
    #[ts(as = "String")]
    created_at: DateTime<Utc>,
}

impl Cart {
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds one unit of `product`, or bumps the existing line by one.
    ///
    /// ## Errors
    /// - [`CoreError::QuantityTooLarge`] if the line is already at the limit
    /// - [`CoreError::CartFull`] if a new line would exceed the line limit
    pub fn add_item(&mut self, product: &Product) -> CoreResult<&CartItem> {
        let index = match self.position(&product.id) {
            Some(index) => {
                let quantity = self.items[index].quantity + 1;
                check_quantity(quantity)?;
                self.items[index].quantity = quantity;
                index
            }
            None => {
                if self.items.len() >= MAX_CART_ITEMS {
                    return Err(CoreError::CartFull {
                        max: MAX_CART_ITEMS,
                    });
                }
                self.items.push(CartItem::from_product(product, 1));
                self.items.len() - 1
            }
        };
        Ok(&self.items[index])
    }

    /// Sets a line's quantity.
    ///
    /// `quantity <= 0` removes the line. Returns the updated line, or `None`
    /// when the line was removed or was never in the cart. A quantity above
    /// [`MAX_ITEM_QUANTITY`] is rejected and the cart is left as it was.
    pub fn update_quantity(
        &mut self,
        product_id: &str,
        quantity: i64,
    ) -> CoreResult<Option<&CartItem>> {
        if quantity <= 0 {
            self.remove_item(product_id);
            return Ok(None);
        }
        check_quantity(quantity)?;

        let Some(index) = self.position(product_id) else {
            return Ok(None);
        };
        self.items[index].quantity = quantity;
        Ok(Some(&self.items[index]))
    }

    /// Removes a line by product id, returning it if it was present.
    pub fn remove_item(&mut self, product_id: &str) -> Option<CartItem> {
        let index = self.position(product_id)?;
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn item(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Computes the bill for this cart with `discount` taken off the end.
    pub fn totals(&self, discount: Money) -> CartTotals {
        CartTotals::compute(self, discount)
    }

    fn position(&self, product_id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.product_id == product_id)
    }
}

fn check_quantity(quantity: i64) -> CoreResult<()> {
    if quantity > MAX_ITEM_QUANTITY {
        return Err(CoreError::QuantityTooLarge {
            requested: quantity,
            max: MAX_ITEM_QUANTITY,
        });
    }
    Ok(())
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// The bill for a cart.
///
/// Tax is computed once on the subtotal, not per line, so
/// `tax_cents == round_half_up(subtotal_cents × 8%)` holds exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
}

impl CartTotals {
    pub fn compute(cart: &Cart, discount: Money) -> Self {
        let subtotal = cart.subtotal();
        let tax = subtotal.calculate_tax(TAX_RATE);
        let total = subtotal + tax - discount;

        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents: subtotal.cents(),
            tax_cents: tax.cents(),
            discount_cents: discount.cents(),
            total_cents: total.cents(),
        }
    }
}
