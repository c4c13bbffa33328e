//! # Seed Data
//!
//! The catalog, customers and operator a fresh register starts with.
//!
//! Every seeded record gets a fresh UUID, so seeded ids never collide with
//! ids assigned later by the store.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::money::Money;
use crate::types::{Customer, NewCustomer, NewProduct, Product, User, UserRole};

/// (sku, name, category, purchase $, selling $, stock, min stock, supplier)
const PRODUCTS: &[(&str, &str, &str, i64, i64, i64, i64, &str)] = &[
    ("ELEC001", "iPhone 15 Pro", "Electronics", 900, 1099, 15, 5, "Apple Inc."),
    ("ELEC002", "Samsung S24 Ultra", "Electronics", 850, 1199, 8, 3, "Samsung Electronics"),
    ("GROC001", "Organic Coffee Beans", "Grocery", 12, 24, 50, 10, "Wholesale Foods"),
    ("GROC002", "Premium Olive Oil", "Grocery", 8, 15, 2, 5, "Wholesale Foods"),
    ("ACC001", "USB-C Fast Charger", "Accessories", 5, 19, 100, 20, "Global Parts"),
    ("ACC002", "Wireless Mouse", "Accessories", 10, 29, 4, 10, "Global Parts"),
];

/// (name, phone, email, credit balance $, joined y/m/d)
const CUSTOMERS: &[(&str, &str, &str, i64, (i32, u32, u32))] = &[
    ("Walk-in Customer", "-", "-", 0, (2024, 1, 1)),
    ("John Doe", "555-0101", "john@example.com", 50, (2024, 2, 15)),
    ("Jane Smith", "555-0102", "jane@example.com", 0, (2024, 3, 10)),
];

pub fn initial_products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(
            |&(sku, name, category, purchase, selling, stock, min_stock, supplier)| {
                Product::from_new(
                    Uuid::new_v4().to_string(),
                    NewProduct {
                        sku: sku.to_string(),
                        name: name.to_string(),
                        category: category.to_string(),
                        supplier: supplier.to_string(),
                        purchase_price_cents: Money::from_major_minor(purchase, 0).cents(),
                        selling_price_cents: Money::from_major_minor(selling, 0).cents(),
                        stock,
                        min_stock,
                        image_url: None,
                    },
                )
            },
        )
        .collect()
}

pub fn initial_customers() -> Vec<Customer> {
    CUSTOMERS
        .iter()
        .map(|&(name, phone, email, credit, (y, m, d))| {
            Customer::from_new(
                Uuid::new_v4().to_string(),
                NewCustomer {
                    name: name.to_string(),
                    phone: phone.to_string(),
                    email: email.to_string(),
                    credit_balance_cents: Money::from_major_minor(credit, 0).cents(),
                    join_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
                },
            )
        })
        .collect()
}

/// The operator stamped on sales when nobody else is configured.
pub fn default_user() -> User {
    User {
        id: "u1".to_string(),
        name: "Admin User".to_string(),
        email: "admin@omnipos.com".to_string(),
        role: UserRole::Admin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate_customer, validate_product};
    use std::collections::HashSet;

    #[test]
    fn test_seed_products_are_valid_and_unique() {
        let products = initial_products();
        assert_eq!(products.len(), 6);
        for p in &products {
            validate_product(p).unwrap();
        }

        let ids: HashSet<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_seed_prices_in_cents() {
        let products = initial_products();
        let iphone = products.iter().find(|p| p.sku == "ELEC001").unwrap();
        assert_eq!(iphone.selling_price_cents, 109900);
        assert_eq!(iphone.purchase_price_cents, 90000);
    }

    #[test]
    fn test_seed_low_stock() {
        let low: Vec<_> = initial_products()
            .into_iter()
            .filter(Product::is_low_stock)
            .map(|p| p.sku)
            .collect();
        assert_eq!(low, vec!["GROC002", "ACC002"]);
    }

    #[test]
    fn test_seed_customers() {
        let customers = initial_customers();
        assert_eq!(customers.len(), 3);
        for c in &customers {
            validate_customer(c).unwrap();
        }
        assert_eq!(customers[0].name, "Walk-in Customer");
        assert_eq!(customers[1].credit_balance_cents, 5000);
        assert_eq!(customers[2].join_date, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    }
}
