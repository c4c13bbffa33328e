//! # omnipos-core: Transaction Engine for OmniPOS
//!
//! This crate is the **heart** of OmniPOS. It owns the catalog, customer
//! registry, sales history and cart, and implements every operation on them
//! with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        OmniPOS Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    External UI                                  │   │
//! │  │   Catalog ──► Cart ──► Checkout ──► Receipt    Inventory  CRM   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON lines (stdin/stdout)              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Register Commands                            │   │
//! │  │    add_to_cart, process_sale, add_product, etc.                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ omnipos-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │  store  │ │  cart   │ │  money  │ │ reports │ │validation│ │   │
//! │  │   │ Store   │ │ Cart    │ │ Money   │ │Dashboard│ │  rules   │ │   │
//! │  │   │checkout │ │CartItem │ │ TaxRate │ │ Stats   │ │          │ │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • IN-MEMORY ONLY            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`store`] - The transaction engine (`Store`) and checkout
//! - [`cart`] - Cart, cart lines, cart totals
//! - [`types`] - Domain types (Product, Customer, Sale, etc.)
//! - [`money`] - Money type with integer arithmetic
//! - [`reports`] - Dashboard and report aggregation
//! - [`seed`] - Starter catalog and customers
//! - [`validation`] - Catalog and registry input rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use omnipos_core::{Money, PaymentMethod, Store};
//!
//! let mut store = Store::seeded();
//! let coffee = store.search_products("coffee")[0].clone();
//!
//! store.add_to_cart(&coffee).unwrap();
//! let sale = store
//!     .process_sale(PaymentMethod::Cash, None, Money::zero())
//!     .unwrap();
//!
//! // $24.00 + 8% tax
//! assert_eq!(sale.total_cents, 2592);
//! assert_eq!(store.sales().len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod reports;
pub mod seed;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem, CartTotals};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use store::{StockShortfall, Store};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sales tax applied to every sale: 800 bps = 8%.
///
/// Fixed for the whole store. Tax is computed on the sale subtotal and
/// rounded half up to the cent.
pub const TAX_RATE: TaxRate = TaxRate::from_bps(800);

/// Maximum distinct lines in a single cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single cart line.
///
/// A sanity bound against mistyped quantities, not a stock policy: a line
/// may still exceed what is on hand.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Highest accepted purchase or selling price, in cents ($10,000,000.00).
///
/// Together with the cart limits this keeps every line total, subtotal and
/// sale total well inside `i64`.
pub const MAX_PRICE_CENTS: i64 = 1_000_000_000;

/// Accepted range for `stock` and `min_stock` on catalog edits.
pub const MAX_STOCK: i64 = 1_000_000_000;
