//! # Validation Module
//!
//! Input validation for catalog and registry entries.
//!
//! ## What Is (and Is Not) Checked
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Checked on add/update                Deliberately NOT checked          │
//! │  ─────────────────────────────        ─────────────────────────────     │
//! │  • sku present, short, no spaces      • sku uniqueness                  │
//! │  • name present                       • stock sign (manual edits may    │
//! │  • prices 0..=MAX_PRICE_CENTS           record a deficit)               │
//! │  • stock within ±MAX_STOCK            • cart quantity vs. stock         │
//! │  • customer email shape                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use omnipos_core::validation::{validate_sku, validate_price_cents};
//!
//! assert!(validate_sku("ELEC001").is_ok());
//! assert!(validate_price_cents("selling price", -1).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{Customer, NewCustomer, NewProduct, Product};
use crate::{MAX_PRICE_CENTS, MAX_STOCK};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_SKU_LEN: usize = 50;
const MAX_NAME_LEN: usize = 200;
const MAX_QUERY_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a SKU (Stock Keeping Unit).
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Only letters, digits, hyphens and underscores
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.len() > MAX_SKU_LEN {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: MAX_SKU_LEN,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a required display name (products and customers).
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a customer email.
///
/// Empty and the `-` placeholder (used by the walk-in customer) are accepted;
/// anything else needs an `@` with text on both sides.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();
    if email.is_empty() || email == "-" {
        return Ok(());
    }

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@domain".to_string(),
        }),
    }
}

/// Validates a search query and returns it trimmed.
///
/// Empty is fine and means "everything".
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > MAX_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents. Zero is allowed (free items).
pub fn validate_price_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    if cents > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates a stock count. Negative values are fine (a recorded deficit).
pub fn validate_stock(field: &str, stock: i64) -> ValidationResult<()> {
    if !(-MAX_STOCK..=MAX_STOCK).contains(&stock) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: -MAX_STOCK,
            max: MAX_STOCK,
        });
    }

    Ok(())
}

// =============================================================================
// Entity Validators
// =============================================================================

struct ProductFields<'a> {
    sku: &'a str,
    name: &'a str,
    purchase_price_cents: i64,
    selling_price_cents: i64,
    stock: i64,
    min_stock: i64,
}

fn validate_product_fields(fields: ProductFields<'_>) -> ValidationResult<()> {
    validate_sku(fields.sku)?;
    validate_name("name", fields.name)?;
    validate_price_cents("purchase price", fields.purchase_price_cents)?;
    validate_price_cents("selling price", fields.selling_price_cents)?;
    validate_stock("stock", fields.stock)?;
    validate_stock("min stock", fields.min_stock)?;
    Ok(())
}

pub fn validate_new_product(data: &NewProduct) -> ValidationResult<()> {
    validate_product_fields(ProductFields {
        sku: &data.sku,
        name: &data.name,
        purchase_price_cents: data.purchase_price_cents,
        selling_price_cents: data.selling_price_cents,
        stock: data.stock,
        min_stock: data.min_stock,
    })
}

pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_fields(ProductFields {
        sku: &product.sku,
        name: &product.name,
        purchase_price_cents: product.purchase_price_cents,
        selling_price_cents: product.selling_price_cents,
        stock: product.stock,
        min_stock: product.min_stock,
    })
}

pub fn validate_new_customer(data: &NewCustomer) -> ValidationResult<()> {
    validate_name("name", &data.name)?;
    validate_email(&data.email)
}

pub fn validate_customer(customer: &Customer) -> ValidationResult<()> {
    validate_name("name", &customer.name)?;
    validate_email(&customer.email)
}

// =============================================================================
// Unit Tests
// =============================================================================
