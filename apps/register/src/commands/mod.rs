//! # Register Commands Module
//!
//! All commands the register answers on its command stream.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (Command enum + dispatch)
//! ├── cart.rs      ◄─── Cart manipulation
//! ├── sale.rs      ◄─── Checkout, sale history
//! ├── product.rs   ◄─── Catalog search, CRUD, low stock
//! ├── customer.rs  ◄─── Customer search and registry
//! ├── report.rs    ◄─── Dashboard and sales reports
//! └── config.rs    ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  UI                                                                     │
//! │  ──                                                                     │
//! │  {"cmd":"addToCart","args":{"productId":"1b4e28ba-..."}}                │
//! │         │                                                               │
//! │         │ (one JSON object per line on stdin)                           │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  Command::AddToCart { product_id }   ◄── serde, camelCase fields       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  dispatch() ──► cart::add_to_cart(&StoreState, product_id)             │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  {"ok":true,"data":{"items":[...],"totals":{...},"shortfalls":[]}}      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command function takes only the state it needs:
//! ```rust,ignore
//! // Only needs config
//! fn get_config(config: &ConfigState)
//!
//! // Only needs the store
//! fn get_cart(store: &StoreState)
//!
//! // Needs both
//! fn process_sale(store: &StoreState, config: &ConfigState, ...)
//! ```

pub mod cart;
pub mod config;
pub mod customer;
pub mod product;
pub mod report;
pub mod sale;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::state::{ConfigState, StoreState};
use omnipos_core::{Customer, NewCustomer, NewProduct, PaymentMethod, Product};

/// A request read from the command stream.
///
/// ```json
/// {"cmd": "processSale", "args": {"paymentMethod": "CASH", "discountCents": 500}}
/// ```
///
/// Every variant takes an `args` object. Commands without parameters, or
/// whose parameters all have defaults, may leave `args` out; see
/// [`Command::parse`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(
    tag = "cmd",
    content = "args",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum Command {
    // Cart
    GetCart {},
    AddToCart {
        product_id: String,
    },
    UpdateCartItem {
        product_id: String,
        quantity: i64,
    },
    RemoveFromCart {
        product_id: String,
    },
    ClearCart {},

    // Sales
    ProcessSale {
        payment_method: PaymentMethod,
        #[serde(default)]
        customer_id: Option<String>,
        #[serde(default)]
        discount_cents: Option<i64>,
    },
    ListSales {
        #[serde(default)]
        limit: Option<usize>,
    },
    GetSale {
        id: String,
    },

    // Catalog
    SearchProducts {
        #[serde(default)]
        query: String,
    },
    GetProduct {
        id: String,
    },
    AddProduct {
        product: NewProduct,
    },
    UpdateProduct {
        product: Product,
    },
    DeleteProduct {
        id: String,
    },
    LowStockProducts {},

    // Customers
    SearchCustomers {
        #[serde(default)]
        query: String,
    },
    GetCustomer {
        id: String,
    },
    AddCustomer {
        customer: NewCustomer,
    },
    UpdateCustomer {
        customer: Customer,
    },

    // Reports
    Dashboard {},
    SalesReport {},

    GetConfig {},
}

impl Command {
    /// Parses one request line.
    ///
    /// A missing or `null` `args` is read as `{}`.
    pub fn parse(line: &str) -> Result<Self, serde_json::Error> {
        let mut request: Value = serde_json::from_str(line)?;
        if let Some(fields) = request.as_object_mut() {
            if fields.get("args").map_or(true, Value::is_null) {
                fields.insert("args".to_string(), Value::Object(Map::new()));
            }
        }
        serde_json::from_value(request)
    }

    /// Wire name, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::GetCart {} => "getCart",
            Command::AddToCart { .. } => "addToCart",
            Command::UpdateCartItem { .. } => "updateCartItem",
            Command::RemoveFromCart { .. } => "removeFromCart",
            Command::ClearCart {} => "clearCart",
            Command::ProcessSale { .. } => "processSale",
            Command::ListSales { .. } => "listSales",
            Command::GetSale { .. } => "getSale",
            Command::SearchProducts { .. } => "searchProducts",
            Command::GetProduct { .. } => "getProduct",
            Command::AddProduct { .. } => "addProduct",
            Command::UpdateProduct { .. } => "updateProduct",
            Command::DeleteProduct { .. } => "deleteProduct",
            Command::LowStockProducts {} => "lowStockProducts",
            Command::SearchCustomers { .. } => "searchCustomers",
            Command::GetCustomer { .. } => "getCustomer",
            Command::AddCustomer { .. } => "addCustomer",
            Command::UpdateCustomer { .. } => "updateCustomer",
            Command::Dashboard {} => "dashboard",
            Command::SalesReport {} => "salesReport",
            Command::GetConfig {} => "getConfig",
        }
    }
}

/// Runs one command against the session state and encodes its result.
pub fn dispatch(
    store: &StoreState,
    config: &ConfigState,
    command: Command,
) -> Result<Value, ApiError> {
    match command {
        Command::GetCart {} => encode(cart::get_cart(store)),
        Command::AddToCart { product_id } => encode(cart::add_to_cart(store, product_id)?),
        Command::UpdateCartItem {
            product_id,
            quantity,
        } => encode(cart::update_cart_item(store, product_id, quantity)?),
        Command::RemoveFromCart { product_id } => {
            encode(cart::remove_from_cart(store, product_id))
        }
        Command::ClearCart {} => encode(cart::clear_cart(store)),

        Command::ProcessSale {
            payment_method,
            customer_id,
            discount_cents,
        } => encode(sale::process_sale(
            store,
            config,
            payment_method,
            customer_id,
            discount_cents,
        )?),
        Command::ListSales { limit } => encode(sale::list_sales(store, limit)),
        Command::GetSale { id } => encode(sale::get_sale(store, id)?),

        Command::SearchProducts { query } => encode(product::search_products(store, query)?),
        Command::GetProduct { id } => encode(product::get_product(store, id)?),
        Command::AddProduct { product } => encode(product::add_product(store, product)?),
        Command::UpdateProduct { product } => encode(product::update_product(store, product)?),
        Command::DeleteProduct { id } => encode(product::delete_product(store, id)?),
        Command::LowStockProducts {} => encode(product::low_stock_products(store)),

        Command::SearchCustomers { query } => {
            encode(customer::search_customers(store, query)?)
        }
        Command::GetCustomer { id } => encode(customer::get_customer(store, id)?),
        Command::AddCustomer { customer } => encode(customer::add_customer(store, customer)?),
        Command::UpdateCustomer { customer } => {
            encode(customer::update_customer(store, customer)?)
        }

        Command::Dashboard {} => encode(report::dashboard(store, config)),
        Command::SalesReport {} => encode(report::sales_report(store, config)),

        Command::GetConfig {} => encode(config::get_config(config)),
    }
}

fn encode<T: Serialize>(value: T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use serde_json::json;

    fn parse(value: Value) -> Command {
        Command::parse(&value.to_string()).unwrap()
    }

    #[test]
    fn test_parse_unit_and_struct_commands() {
        assert_eq!(parse(json!({ "cmd": "getCart" })), Command::GetCart {});
        assert_eq!(
            parse(json!({ "cmd": "updateCartItem", "args": { "productId": "p1", "quantity": 3 } })),
            Command::UpdateCartItem {
                product_id: "p1".to_string(),
                quantity: 3,
            }
        );
        assert_eq!(
            parse(json!({ "cmd": "processSale", "args": { "paymentMethod": "CARD" } })),
            Command::ProcessSale {
                payment_method: PaymentMethod::Card,
                customer_id: None,
                discount_cents: None,
            }
        );
    }

    #[test]
    fn test_args_may_be_empty_or_left_out() {
        assert_eq!(parse(json!({ "cmd": "getCart", "args": {} })), Command::GetCart {});
        assert_eq!(parse(json!({ "cmd": "dashboard", "args": null })), Command::Dashboard {});
        assert_eq!(
            parse(json!({ "cmd": "listSales" })),
            Command::ListSales { limit: None }
        );
        assert_eq!(
            parse(json!({ "cmd": "searchProducts" })),
            Command::SearchProducts {
                query: String::new(),
            }
        );
        assert_eq!(
            parse(json!({ "cmd": "searchCustomers", "args": {} })),
            Command::SearchCustomers {
                query: String::new(),
            }
        );
    }

    #[test]
    fn test_required_args_are_still_required() {
        let err = Command::parse(r#"{"cmd":"addToCart"}"#).unwrap_err();
        assert!(err.to_string().contains("productId"));
        assert!(Command::parse(r#"{"cmd":"getSale","args":{}}"#).is_err());
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        assert!(Command::parse(r#"{"cmd":"refund"}"#).is_err());
        assert!(Command::parse("[1, 2]").is_err());
    }

    #[test]
    fn test_dispatch_checkout() {
        let store = StoreState::default();
        let config = ConfigState::default();
        let coffee = store.with_store(|s| s.search_products("GROC001")[0].id.clone());

        dispatch(&store, &config, Command::AddToCart { product_id: coffee }).unwrap();
        let receipt = dispatch(
            &store,
            &config,
            Command::ProcessSale {
                payment_method: PaymentMethod::Cash,
                customer_id: None,
                discount_cents: None,
            },
        )
        .unwrap();

        assert_eq!(receipt["sale"]["totalCents"], json!(2592));
        assert_eq!(receipt["display"]["total"], json!("$25.92"));

        let err = dispatch(
            &store,
            &config,
            Command::ProcessSale {
                payment_method: PaymentMethod::Cash,
                customer_id: None,
                discount_cents: None,
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyCart);
    }

    #[test]
    fn test_dispatch_get_config() {
        let config = ConfigState::default();
        let value = dispatch(&StoreState::default(), &config, Command::GetConfig {}).unwrap();
        assert_eq!(value["storeName"], json!("OmniPOS Store"));
        assert_eq!(value["taxRateBps"], json!(800));
    }
}
