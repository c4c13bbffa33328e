//! # Store: The Transaction Engine
//!
//! Owns every collection the register works with and is the only way to
//! change them.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                              Store                                      │
//! │                                                                         │
//! │   products: Vec<Product>     ◄── add / update / delete, stock decrement │
//! │   customers: Vec<Customer>   ◄── add / update                          │
//! │   sales: Vec<Sale>           ◄── prepend on checkout (newest first)    │
//! │   cart: Cart                 ◄── add / update qty / remove / clear      │
//! │   user: User                     (stamped on sales as cashier_id)       │
//! │                                                                         │
//! │   Readers get `&[T]` borrows; nothing outside can mutate.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Checkout Commit
//! ```text
//! process_sale(method, customer, discount)
//!      │
//!      ├── cart empty?        → Err(EmptyCart)        (nothing touched)
//!      ├── discount < 0?      → Err(InvalidDiscount)  (nothing touched)
//!      │
//!      ├── build Sale from cart snapshot + totals
//!      ├── stock -= qty for every line (no floor)
//!      ├── sales.insert(0, sale)
//!      └── cart.clear()
//! ```
//! Every check runs before the first mutation and nothing after that point
//! can fail, so a caller sees either the whole commit or none of it.
//!
//! Lookups are linear scans.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::{Cart, CartItem, CartTotals};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::seed;
use crate::types::{
    Customer, NewCustomer, NewProduct, PaymentMethod, Product, Sale, SaleItem, User,
};
use crate::validation;

/// A cart line asking for more units than the catalog has on hand.
///
/// Overselling is allowed at checkout; this exists so the UI can warn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StockShortfall {
    pub product_id: String,
    pub name: String,
    pub requested: i64,
    /// Current stock, or 0 when the product has been deleted.
    pub available: i64,
}

/// The in-memory transaction engine.
#[derive(Debug, Clone)]
pub struct Store {
    user: User,
    products: Vec<Product>,
    customers: Vec<Customer>,
    /// Most recent first.
    sales: Vec<Sale>,
    cart: Cart,
    receipt_seq: u64,
}

impl Store {
    /// An empty store operated by `user`.
    pub fn new(user: User) -> Self {
        Self::with_data(user, Vec::new(), Vec::new())
    }

    pub fn with_data(user: User, products: Vec<Product>, customers: Vec<Customer>) -> Self {
        Store {
            user,
            products,
            customers,
            sales: Vec::new(),
            cart: Cart::new(),
            receipt_seq: 0,
        }
    }

    /// A store loaded with the starter catalog, customers and admin user.
    pub fn seeded() -> Self {
        let store = Self::with_data(
            seed::default_user(),
            seed::initial_products(),
            seed::initial_customers(),
        );
        info!(
            products = store.products.len(),
            customers = store.customers.len(),
            "Store seeded"
        );
        store
    }

    // =========================================================================
    // Read Accessors
    // =========================================================================

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// Sales history, most recent first.
    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    pub fn sale(&self, id: &str) -> Option<&Sale> {
        self.sales.iter().find(|s| s.id == id)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Catalog search on name, SKU or category. Empty query returns all.
    pub fn search_products(&self, query: &str) -> Vec<&Product> {
        self.products.iter().filter(|p| p.matches(query)).collect()
    }

    /// Products whose stock is below their reorder threshold.
    pub fn low_stock_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_low_stock()).collect()
    }

    pub fn search_customers(&self, query: &str) -> Vec<&Customer> {
        self.customers.iter().filter(|c| c.matches(query)).collect()
    }

    // =========================================================================
    // Cart Management
    // =========================================================================

    /// Adds one unit of `product` to the cart, snapshotting its price.
    ///
    /// No stock check: a line may exceed what is on hand. The cart's own
    /// line and quantity limits still apply.
    pub fn add_to_cart(&mut self, product: &Product) -> CoreResult<&CartItem> {
        let item = self.cart.add_item(product)?;
        debug!(product_id = %item.product_id, quantity = item.quantity, "Added to cart");
        Ok(item)
    }

    /// Looks up a catalog product by id and adds it to the cart.
    pub fn add_product_to_cart(&mut self, product_id: &str) -> CoreResult<&CartItem> {
        let product = self
            .products
            .iter()
            .find(|p| p.id == product_id)
            .ok_or_else(|| CoreError::unknown_product(product_id))?;

        let item = self.cart.add_item(product)?;
        debug!(product_id = %item.product_id, quantity = item.quantity, "Added to cart");
        Ok(item)
    }

    /// Removes a cart line. No-op if it is not in the cart.
    pub fn remove_from_cart(&mut self, product_id: &str) -> Option<CartItem> {
        let removed = self.cart.remove_item(product_id);
        debug!(product_id, removed = removed.is_some(), "Removed from cart");
        removed
    }

    /// Sets a cart line's quantity; `quantity <= 0` removes the line.
    ///
    /// There is no upper bound against current stock; quantities above
    /// [`crate::MAX_ITEM_QUANTITY`] are rejected with the cart unchanged.
    pub fn update_cart_quantity(
        &mut self,
        product_id: &str,
        quantity: i64,
    ) -> CoreResult<Option<&CartItem>> {
        debug!(product_id, quantity, "Updating cart quantity");
        self.cart.update_quantity(product_id, quantity)
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
        debug!("Cart cleared");
    }

    /// Current bill for the cart.
    pub fn cart_totals(&self, discount: Money) -> CartTotals {
        self.cart.totals(discount)
    }

    /// Cart lines that ask for more than the catalog has on hand.
    pub fn cart_shortfalls(&self) -> Vec<StockShortfall> {
        self.cart
            .items()
            .iter()
            .filter_map(|item| {
                let available = self.product(&item.product_id).map_or(0, |p| p.stock);
                (item.quantity > available).then(|| StockShortfall {
                    product_id: item.product_id.clone(),
                    name: item.name.clone(),
                    requested: item.quantity,
                    available,
                })
            })
            .collect()
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Commits the cart as a sale.
    ///
    /// ## Errors
    /// - [`CoreError::EmptyCart`] when there is nothing to sell
    /// - [`CoreError::InvalidDiscount`] for a negative discount
    ///
    /// Either way the store is left exactly as it was.
    ///
    /// ## Not Checked
    /// `customer_id` is recorded as given. A discount larger than the bill
    /// yields a negative total. Stock may go negative.
    ///
    /// ## Example
    /// ```rust
    /// use omnipos_core::{Money, PaymentMethod, Store};
    ///
    /// let mut store = Store::seeded();
    /// let mouse = store.products().iter().find(|p| p.sku == "ACC002").unwrap().clone();
    ///
    /// store.add_to_cart(&mouse).unwrap();
    /// store.add_to_cart(&mouse).unwrap();
    /// let sale = store.process_sale(PaymentMethod::Cash, None, Money::zero()).unwrap();
    ///
    /// assert_eq!(sale.subtotal_cents, 5800);
    /// assert_eq!(sale.tax_cents, 464);
    /// assert_eq!(sale.total_cents, 6264);
    /// assert_eq!(store.product(&mouse.id).unwrap().stock, mouse.stock - 2);
    /// assert!(store.cart().is_empty());
    /// ```
    pub fn process_sale(
        &mut self,
        payment_method: PaymentMethod,
        customer_id: Option<&str>,
        discount: Money,
    ) -> CoreResult<Sale> {
        if self.cart.is_empty() {
            debug!("Checkout on empty cart");
            return Err(CoreError::EmptyCart);
        }

        if discount.is_negative() {
            return Err(CoreError::InvalidDiscount {
                discount_cents: discount.cents(),
            });
        }

        let totals = self.cart.totals(discount);
        let now = Utc::now();
        self.receipt_seq += 1;

        let sale = Sale {
            id: Uuid::new_v4().to_string(),
            receipt_number: format!("{}-{:06}", now.format("%y%m%d"), self.receipt_seq),
            items: self
                .cart
                .items()
                .iter()
                .map(SaleItem::from_cart_item)
                .collect(),
            subtotal_cents: totals.subtotal_cents,
            tax_cents: totals.tax_cents,
            discount_cents: totals.discount_cents,
            total_cents: totals.total_cents,
            payment_method,
            customer_id: customer_id.map(str::to_string),
            timestamp: now,
            cashier_id: self.user.id.clone(),
        };

        for item in &sale.items {
            self.decrement_stock(&item.product_id, item.quantity);
        }

        self.sales.insert(0, sale.clone());
        self.cart.clear();

        info!(
            sale_id = %sale.id,
            receipt = %sale.receipt_number,
            total = %sale.total(),
            items = sale.items.len(),
            "Sale committed"
        );

        Ok(sale)
    }

    fn decrement_stock(&mut self, product_id: &str, quantity: i64) {
        let Some(product) = self.products.iter_mut().find(|p| p.id == product_id) else {
            warn!(product_id, quantity, "Sold product no longer in catalog, stock not adjusted");
            return;
        };

        product.stock -= quantity;
        if product.stock < 0 {
            warn!(
                product_id,
                sku = %product.sku,
                stock = product.stock,
                "Stock is negative after sale"
            );
        }
    }

    // =========================================================================
    // Product Catalog
    // =========================================================================

    /// Adds a product under a new id. SKUs are not required to be unique.
    pub fn add_product(&mut self, data: NewProduct) -> CoreResult<&Product> {
        validation::validate_new_product(&data)?;

        let product = Product::from_new(Uuid::new_v4().to_string(), data);
        info!(product_id = %product.id, sku = %product.sku, "Product added");
        self.products.push(product);

        Ok(&self.products[self.products.len() - 1])
    }

    /// Replaces the product with the same id, in place.
    ///
    /// Returns `Ok(None)` if no product has that id; the catalog is unchanged.
    pub fn update_product(&mut self, product: Product) -> CoreResult<Option<&Product>> {
        validation::validate_product(&product)?;

        let Some(index) = self.products.iter().position(|p| p.id == product.id) else {
            debug!(product_id = %product.id, "Update of unknown product ignored");
            return Ok(None);
        };

        debug!(product_id = %product.id, "Product updated");
        self.products[index] = product;
        Ok(Some(&self.products[index]))
    }

    /// Removes a product and returns it.
    ///
    /// Sales keep their own snapshot of the product and a cart line for it
    /// stays in the cart.
    pub fn delete_product(&mut self, id: &str) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        let product = self.products.remove(index);
        info!(product_id = %product.id, sku = %product.sku, "Product deleted");
        Some(product)
    }

    // =========================================================================
    // Customer Registry
    // =========================================================================

    pub fn add_customer(&mut self, data: NewCustomer) -> CoreResult<&Customer> {
        validation::validate_new_customer(&data)?;

        let customer = Customer::from_new(Uuid::new_v4().to_string(), data);
        info!(customer_id = %customer.id, "Customer added");
        self.customers.push(customer);

        Ok(&self.customers[self.customers.len() - 1])
    }

    /// Replaces the customer with the same id. `Ok(None)` if unknown.
    pub fn update_customer(&mut self, customer: Customer) -> CoreResult<Option<&Customer>> {
        validation::validate_customer(&customer)?;

        let Some(index) = self.customers.iter().position(|c| c.id == customer.id) else {
            debug!(customer_id = %customer.id, "Update of unknown customer ignored");
            return Ok(None);
        };

        self.customers[index] = customer;
        Ok(Some(&self.customers[index]))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TAX_RATE;
    use pretty_assertions::assert_eq;

    fn new_product(sku: &str, selling: i64, stock: i64) -> NewProduct {
        NewProduct {
            sku: sku.to_string(),
            name: format!("Product {}", sku),
            category: "General".to_string(),
            supplier: "Acme".to_string(),
            purchase_price_cents: selling / 2,
            selling_price_cents: selling,
            stock,
            min_stock: 1,
            image_url: None,
        }
    }

    /// Store with product A ($10.00, stock 5) and B ($5.00, stock 3).
    fn store_ab() -> (Store, Product, Product) {
        let mut store = Store::new(seed::default_user());
        let a = store.add_product(new_product("A", 1000, 5)).unwrap().clone();
        let b = store.add_product(new_product("B", 500, 3)).unwrap().clone();
        (store, a, b)
    }

    #[test]
    fn test_add_to_cart_twice_gives_quantity_two() {
        let (mut store, a, _) = store_ab();

        store.add_to_cart(&a).unwrap();
        store.add_to_cart(&a).unwrap();

        assert_eq!(store.cart().item_count(), 1);
        assert_eq!(store.cart().item(&a.id).unwrap().quantity, 2);
    }

    #[test]
    fn test_add_product_to_cart_unknown_id() {
        let (mut store, _, _) = store_ab();
        let err = store.add_product_to_cart("nope").unwrap_err();
        assert!(matches!(err, CoreError::UnknownEntity { entity: "Product", .. }));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_update_quantity_zero_equals_remove() {
        let (mut store, a, b) = store_ab();
        store.add_to_cart(&a).unwrap();
        store.add_to_cart(&b).unwrap();

        let mut other = store.clone();
        store.update_cart_quantity(&a.id, 0).unwrap();
        other.remove_from_cart(&a.id);

        assert_eq!(store.cart().items(), other.cart().items());
        assert!(store.cart().item(&a.id).is_none());
    }

    #[test]
    fn test_update_quantity_is_not_bounded_by_stock() {
        let (mut store, a, _) = store_ab();
        store.add_to_cart(&a).unwrap();

        let item = store.update_cart_quantity(&a.id, 50).unwrap().unwrap();
        assert_eq!(item.quantity, 50);
        assert_eq!(
            store.cart_shortfalls(),
            vec![StockShortfall {
                product_id: a.id.clone(),
                name: a.name.clone(),
                requested: 50,
                available: 5,
            }]
        );
    }

    #[test]
    fn test_huge_quantity_is_rejected_and_checkout_still_works() {
        let (mut store, a, _) = store_ab();
        store.add_to_cart(&a).unwrap();
        store.update_cart_quantity(&a.id, 4).unwrap();

        let err = store
            .update_cart_quantity(&a.id, i64::MAX / 2)
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::QuantityTooLarge {
                requested,
                max: crate::MAX_ITEM_QUANTITY,
            } if requested == i64::MAX / 2
        ));
        assert_eq!(store.cart().item(&a.id).unwrap().quantity, 4);

        let sale = store
            .process_sale(PaymentMethod::Cash, None, Money::zero())
            .unwrap();
        assert_eq!(sale.subtotal_cents, 4000);
        assert_eq!(sale.total_cents, 4320);
        assert_eq!(store.product(&a.id).unwrap().stock, 1);
    }

    #[test]
    fn test_largest_cart_checks_out_without_overflow() {
        let mut store = Store::new(seed::default_user());
        let mut data = new_product("BIG", crate::MAX_PRICE_CENTS, 0);
        data.purchase_price_cents = crate::MAX_PRICE_CENTS;
        let big = store.add_product(data).unwrap().clone();

        store.add_to_cart(&big).unwrap();
        store
            .update_cart_quantity(&big.id, crate::MAX_ITEM_QUANTITY)
            .unwrap();

        let sale = store
            .process_sale(PaymentMethod::Card, None, Money::zero())
            .unwrap();
        let subtotal = crate::MAX_PRICE_CENTS * crate::MAX_ITEM_QUANTITY;
        assert_eq!(sale.subtotal_cents, subtotal);
        assert_eq!(sale.total_cents, subtotal + subtotal / 100 * 8);
        assert_eq!(store.product(&big.id).unwrap().stock, -crate::MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_checkout_scenario_totals() {
        let (mut store, a, b) = store_ab();
        store.add_to_cart(&a).unwrap();
        store.add_to_cart(&a).unwrap();
        store.add_to_cart(&b).unwrap();

        let sale = store
            .process_sale(PaymentMethod::Card, None, Money::zero())
            .unwrap();

        assert_eq!(sale.subtotal_cents, 2500);
        assert_eq!(sale.tax_cents, 200);
        assert_eq!(sale.discount_cents, 0);
        assert_eq!(sale.total_cents, 2700);
        assert_eq!(sale.cashier_id, "u1");
        assert_eq!(sale.payment_method, PaymentMethod::Card);
    }

    #[test]
    fn test_checkout_total_invariant_with_discount() {
        let (mut store, a, b) = store_ab();
        store.add_to_cart(&a).unwrap();
        store.add_to_cart(&b).unwrap();
        store.update_cart_quantity(&b.id, 3).unwrap();

        let sale = store
            .process_sale(PaymentMethod::Cash, Some("c2"), Money::from_cents(350))
            .unwrap();

        let subtotal = Money::from_cents(sale.subtotal_cents);
        assert_eq!(sale.subtotal_cents, 1000 + 1500);
        assert_eq!(sale.tax_cents, subtotal.calculate_tax(TAX_RATE).cents());
        assert_eq!(
            sale.total_cents,
            sale.subtotal_cents + sale.tax_cents - sale.discount_cents
        );
        assert_eq!(sale.customer_id.as_deref(), Some("c2"));
    }

    #[test]
    fn test_checkout_decrements_stock_and_clears_cart() {
        let (mut store, a, b) = store_ab();
        store.add_to_cart(&a).unwrap();
        store.add_to_cart(&a).unwrap();
        store.add_to_cart(&b).unwrap();

        let sale = store
            .process_sale(PaymentMethod::Cash, None, Money::zero())
            .unwrap();

        for item in &sale.items {
            let before = if item.product_id == a.id { a.stock } else { b.stock };
            let after = store.product(&item.product_id).unwrap().stock;
            assert_eq!(after, before - item.quantity);
        }
        assert!(store.cart().is_empty());
        assert_eq!(store.sales().len(), 1);
    }

    #[test]
    fn test_checkout_allows_overselling() {
        let (mut store, _, b) = store_ab();
        store.add_to_cart(&b).unwrap();
        store.update_cart_quantity(&b.id, 5).unwrap();

        store
            .process_sale(PaymentMethod::Cash, None, Money::zero())
            .unwrap();

        assert_eq!(store.product(&b.id).unwrap().stock, -2);
    }

    #[test]
    fn test_checkout_empty_cart_changes_nothing() {
        let mut store = Store::seeded();
        let products = store.products().to_vec();
        let customers = store.customers().to_vec();

        let err = store
            .process_sale(PaymentMethod::Cash, None, Money::zero())
            .unwrap_err();

        assert!(matches!(err, CoreError::EmptyCart));
        assert!(store.sales().is_empty());
        assert_eq!(store.products(), products.as_slice());
        assert_eq!(store.customers(), customers.as_slice());
    }

    #[test]
    fn test_checkout_negative_discount_changes_nothing() {
        let (mut store, a, _) = store_ab();
        store.add_to_cart(&a).unwrap();

        let err = store
            .process_sale(PaymentMethod::Cash, None, Money::from_cents(-100))
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidDiscount { discount_cents: -100 }));
        assert_eq!(store.cart().total_quantity(), 1);
        assert_eq!(store.product(&a.id).unwrap().stock, 5);
        assert!(store.sales().is_empty());
    }

    #[test]
    fn test_checkout_discount_above_bill_gives_negative_total() {
        let (mut store, _, b) = store_ab();
        store.add_to_cart(&b).unwrap();

        let sale = store
            .process_sale(PaymentMethod::Cash, None, Money::from_cents(1000))
            .unwrap();

        assert_eq!(sale.total_cents, 500 + 40 - 1000);
    }

    #[test]
    fn test_sales_most_recent_first_with_unique_receipts() {
        let (mut store, a, b) = store_ab();

        store.add_to_cart(&a).unwrap();
        let first = store
            .process_sale(PaymentMethod::Cash, None, Money::zero())
            .unwrap();
        store.add_to_cart(&b).unwrap();
        let second = store
            .process_sale(PaymentMethod::Online, None, Money::zero())
            .unwrap();

        let ids: Vec<_> = store.sales().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec![second.id.as_str(), first.id.as_str()]);
        assert_ne!(first.receipt_number, second.receipt_number);
        assert!(first.receipt_number.ends_with("-000001"));
        assert!(second.receipt_number.ends_with("-000002"));
    }

    #[test]
    fn test_sale_keeps_snapshot_after_product_edit_and_delete() {
        let (mut store, a, _) = store_ab();
        store.add_to_cart(&a).unwrap();
        let sale = store
            .process_sale(PaymentMethod::Cash, None, Money::zero())
            .unwrap();

        let mut edited = store.product(&a.id).unwrap().clone();
        edited.selling_price_cents = 9999;
        edited.name = "Renamed".to_string();
        store.update_product(edited).unwrap();
        store.delete_product(&a.id);

        let recorded = store.sale(&sale.id).unwrap();
        assert_eq!(recorded, &sale);
        assert_eq!(recorded.items[0].name, "Product A");
        assert_eq!(recorded.items[0].selling_price_cents, 1000);
    }

    #[test]
    fn test_checkout_skips_deleted_products() {
        let (mut store, a, b) = store_ab();
        store.add_to_cart(&a).unwrap();
        store.add_to_cart(&b).unwrap();
        store.delete_product(&a.id);

        // The stale line still sells and is still recorded.
        let sale = store
            .process_sale(PaymentMethod::Cash, None, Money::zero())
            .unwrap();

        assert_eq!(sale.items.len(), 2);
        assert_eq!(sale.subtotal_cents, 1500);
        assert_eq!(store.product(&b.id).unwrap().stock, 2);
        assert!(store.product(&a.id).is_none());
    }

    #[test]
    fn test_delete_product_keeps_cart_line() {
        let (mut store, a, _) = store_ab();
        store.add_to_cart(&a).unwrap();

        let removed = store.delete_product(&a.id).unwrap();
        assert_eq!(removed.id, a.id);
        assert!(store.cart().item(&a.id).is_some());
        assert_eq!(store.cart_shortfalls()[0].available, 0);
    }

    #[test]
    fn test_add_product_assigns_unique_ids_and_allows_duplicate_sku() {
        let mut store = Store::new(seed::default_user());
        let first = store.add_product(new_product("DUP", 100, 1)).unwrap().id.clone();
        let second = store.add_product(new_product("DUP", 200, 1)).unwrap().id.clone();

        assert_ne!(first, second);
        assert_eq!(store.products().len(), 2);
    }

    #[test]
    fn test_add_product_rejects_invalid() {
        let mut store = Store::new(seed::default_user());
        let err = store.add_product(new_product("", 100, 1)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(store.products().is_empty());
    }

    #[test]
    fn test_update_product_in_place() {
        let (mut store, a, b) = store_ab();
        let mut edited = a.clone();
        edited.stock = -4;

        let updated = store.update_product(edited).unwrap().unwrap();
        assert_eq!(updated.stock, -4);
        // position preserved
        assert_eq!(store.products()[0].id, a.id);
        assert_eq!(store.products()[1], b);
    }

    #[test]
    fn test_update_unknown_product_is_noop() {
        let (mut store, a, _) = store_ab();
        let before = store.products().to_vec();
        let mut ghost = a.clone();
        ghost.id = "ghost".to_string();

        assert!(store.update_product(ghost).unwrap().is_none());
        assert_eq!(store.products(), before.as_slice());
        assert!(store.delete_product("ghost").is_none());
    }

    #[test]
    fn test_customer_add_and_update() {
        let mut store = Store::seeded();
        let added = store
            .add_customer(NewCustomer {
                name: "Ada Lovelace".to_string(),
                phone: "555-0199".to_string(),
                email: "ada@example.com".to_string(),
                credit_balance_cents: 0,
                join_date: Utc::now().date_naive(),
            })
            .unwrap()
            .clone();
        assert_eq!(store.customers().len(), 4);

        let mut edited = added.clone();
        edited.credit_balance_cents = 1250;
        store.update_customer(edited).unwrap();
        assert_eq!(store.customer(&added.id).unwrap().credit_balance_cents, 1250);

        let mut ghost = added;
        ghost.id = "ghost".to_string();
        assert!(store.update_customer(ghost).unwrap().is_none());
        assert_eq!(store.customers().len(), 4);
    }

    #[test]
    fn test_search() {
        let store = Store::seeded();

        let skus: Vec<_> = store.search_products("grocery").into_iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["GROC001", "GROC002"]);
        assert_eq!(store.search_products("").len(), 6);

        let names: Vec<_> = store.search_customers("0102").into_iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Jane Smith"]);

        assert_eq!(store.low_stock_products().len(), 2);
    }
}
