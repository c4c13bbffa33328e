//! # Domain Types
//!
//! Core domain types used throughout OmniPOS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Sale       │   │    Customer     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  sku (business) │   │  receipt_number │   │  name, phone    │       │
//! │  │  selling_price  │   │  items (frozen) │   │  credit_balance │       │
//! │  │  stock          │   │  total_cents    │   │  join_date      │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │ PaymentMethod   │   │      User       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  Cash           │   │  id, role       │       │
//! │  │  800 = 8%       │   │  Card / Online  │   │  (the cashier)  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot, Not Reference
//! A [`SaleItem`] owns a copy of every product field it needs. Editing or
//! deleting the live [`Product`] afterwards never changes a recorded sale.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartItem;
use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 800 bps = 8%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Stock Keeping Unit. Not required to be unique.
    pub sku: String,

    /// Display name shown to the cashier and on the receipt.
    pub name: String,

    pub category: String,

    pub supplier: String,

    /// What the store paid per unit, in cents.
    pub purchase_price_cents: i64,

    /// What the customer pays per unit, in cents.
    pub selling_price_cents: i64,

    /// Units on hand. Sales may drive this below zero.
    pub stock: i64,

    /// Reorder threshold. Advisory only.
    pub min_stock: i64,

    pub image_url: Option<String>,
}

impl Product {
    /// Builds a product from catalog entry data and a freshly assigned id.
    pub fn from_new(id: String, data: NewProduct) -> Self {
        Product {
            id,
            sku: data.sku,
            name: data.name,
            category: data.category,
            supplier: data.supplier,
            purchase_price_cents: data.purchase_price_cents,
            selling_price_cents: data.selling_price_cents,
            stock: data.stock,
            min_stock: data.min_stock,
            image_url: data.image_url,
        }
    }

    #[inline]
    pub fn selling_price(&self) -> Money {
        Money::from_cents(self.selling_price_cents)
    }

    #[inline]
    pub fn purchase_price(&self) -> Money {
        Money::from_cents(self.purchase_price_cents)
    }

    /// Stock has fallen below the reorder threshold.
    ///
    /// ```rust
    /// use omnipos_core::seed;
    ///
    /// let olive_oil = seed::initial_products()
    ///     .into_iter()
    ///     .find(|p| p.sku == "GROC002")
    ///     .unwrap();
    /// assert!(olive_oil.is_low_stock()); // 2 on hand, reorder at 5
    /// ```
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.stock < self.min_stock
    }

    /// Case-insensitive match on name, SKU or category.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.sku.to_lowercase().contains(&query)
            || self.category.to_lowercase().contains(&query)
    }
}

/// Catalog entry data: a product before it has an id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub supplier: String,
    pub purchase_price_cents: i64,
    pub selling_price_cents: i64,
    pub stock: i64,
    pub min_stock: i64,
    pub image_url: Option<String>,
}

// =============================================================================
// Customer
// =============================================================================

/// A registered customer.
///
/// Sales reference customers by id only; the registry is never consulted
/// during checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Positive means the customer owes the store.
    pub credit_balance_cents: i64,
    #[ts(as = "String")]
    pub join_date: NaiveDate,
}

impl Customer {
    pub fn from_new(id: String, data: NewCustomer) -> Self {
        Customer {
            id,
            name: data.name,
            phone: data.phone,
            email: data.email,
            credit_balance_cents: data.credit_balance_cents,
            join_date: data.join_date,
        }
    }

    #[inline]
    pub fn has_debt(&self) -> bool {
        self.credit_balance_cents > 0
    }

    /// Case-insensitive name match, or a plain substring of the phone number.
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase()) || self.phone.contains(query)
    }
}

/// Registry entry data: a customer before it has an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub credit_balance_cents: i64,
    #[ts(as = "String")]
    #[serde(default = "today")]
    pub join_date: NaiveDate,
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

// =============================================================================
// User
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Cashier,
    Manager,
}

/// The person operating the register. Stamped on every sale as `cashier_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

// =============================================================================
// Payment Method
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// Card payment on an external terminal.
    Card,
    /// Online transfer or wallet.
    Online,
}

// =============================================================================
// Sale
// =============================================================================

/// A committed sale. Immutable once created.
///
/// ## Invariants
/// - `total_cents == subtotal_cents + tax_cents - discount_cents`
/// - `tax_cents == round_half_up(subtotal_cents × TAX_RATE)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    /// Human-readable receipt number, `YYMMDD-NNNNNN`.
    pub receipt_number: String,
    pub items: Vec<SaleItem>,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
    pub payment_method: PaymentMethod,
    /// Not validated against the customer registry.
    pub customer_id: Option<String>,
    #[ts(as = "String")]
    pub timestamp: DateTime<Utc>,
    pub cashier_id: String,
}

impl Sale {
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// What the sold goods cost the store (purchase price × quantity).
    pub fn cost(&self) -> Money {
        self.items.iter().map(SaleItem::cost).sum()
    }
}

// =============================================================================
// Sale Item
// =============================================================================

/// A line item in a sale.
/// Uses snapshot pattern to freeze product data at time of sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    /// Id of the product this line came from. May no longer exist.
    pub product_id: String,
    pub sku: String,
    pub name: String,
    pub category: String,
    pub supplier: String,
    /// Unit cost at time of sale (frozen).
    pub purchase_price_cents: i64,
    /// Unit price at time of sale (frozen).
    pub selling_price_cents: i64,
    pub quantity: i64,
    /// selling price × quantity
    pub line_total_cents: i64,
}

impl SaleItem {
    /// Freezes a cart line into a sale line.
    pub fn from_cart_item(item: &CartItem) -> Self {
        SaleItem {
            product_id: item.product_id.clone(),
            sku: item.sku.clone(),
            name: item.name.clone(),
            category: item.category.clone(),
            supplier: item.supplier.clone(),
            purchase_price_cents: item.purchase_price_cents,
            selling_price_cents: item.selling_price_cents,
            quantity: item.quantity,
            line_total_cents: item.line_total().cents(),
        }
    }

    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents)
    }

    #[inline]
    pub fn cost(&self) -> Money {
        Money::from_cents(self.purchase_price_cents).multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn product() -> Product {
        Product::from_new(
            "p1".to_string(),
            NewProduct {
                sku: "ACC002".to_string(),
                name: "Wireless Mouse".to_string(),
                category: "Accessories".to_string(),
                supplier: "Global Parts".to_string(),
                purchase_price_cents: 1000,
                selling_price_cents: 2900,
                stock: 4,
                min_stock: 10,
                image_url: None,
            },
        )
    }

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(800);
        assert_eq!(rate.bps(), 800);
        assert!((rate.percentage() - 8.0).abs() < 0.001);
    }

    #[test]
    fn test_product_matches_name_sku_and_category() {
        let p = product();
        assert!(p.matches("mouse"));
        assert!(p.matches("acc0"));
        assert!(p.matches("ACCESS"));
        assert!(p.matches(""));
        assert!(!p.matches("keyboard"));
    }

    #[test]
    fn test_product_low_stock() {
        let mut p = product();
        assert!(p.is_low_stock());
        p.stock = 10;
        assert!(!p.is_low_stock());
    }

    #[test]
    fn test_customer_matches_name_or_phone() {
        let c = Customer::from_new(
            "c2".to_string(),
            NewCustomer {
                name: "John Doe".to_string(),
                phone: "555-0101".to_string(),
                email: "john@example.com".to_string(),
                credit_balance_cents: 5000,
                join_date: NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
            },
        );
        assert!(c.matches("john"));
        assert!(c.matches("0101"));
        assert!(!c.matches("jane"));
        assert!(c.has_debt());
    }

    #[test]
    fn test_new_customer_defaults() {
        let json = r#"{"name":"Ada","phone":"555-0199","email":"ada@example.com"}"#;
        let c: NewCustomer = serde_json::from_str(json).unwrap();
        assert_eq!(c.credit_balance_cents, 0);
        assert!(c.join_date <= Utc::now().date_naive());
    }

    #[test]
    fn test_payment_method_wire_format() {
        assert_eq!(serde_json::to_string(&PaymentMethod::Cash).unwrap(), "\"CASH\"");
        let m: PaymentMethod = serde_json::from_str("\"ONLINE\"").unwrap();
        assert_eq!(m, PaymentMethod::Online);
    }
}
