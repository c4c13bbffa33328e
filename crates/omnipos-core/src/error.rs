//! # Error Types
//!
//! Domain-specific error types for omnipos-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  omnipos-core errors (this file)                                       │
//! │  ├── CoreError        - Transaction engine failures                    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  register errors (app crate)                                           │
//! │  └── ApiError         - What the UI sees (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → UI                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed operation never leaves the store half-modified: every check runs
//! before the first mutation.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Transaction engine errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Checkout was attempted with nothing in the cart.
    ///
    /// This is the "nothing happened" signal: no sale is created and no
    /// stock, history or customer record is touched.
    #[error("Cart is empty")]
    EmptyCart,

    /// An id did not match any record of the given kind.
    #[error("{entity} not found: {id}")]
    UnknownEntity { entity: &'static str, id: String },

    /// Discounts cannot be negative.
    ///
    /// A discount larger than the bill is accepted and produces a negative
    /// total; only a negative discount (a hidden surcharge) is rejected.
    #[error("Invalid discount: {discount_cents} cents")]
    InvalidDiscount { discount_cents: i64 },

    /// Cart line quantity above the per-line limit.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// A new line would exceed the cart's line limit.
    #[error("Cart cannot have more than {max} items")]
    CartFull { max: usize },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    pub fn unknown_product(id: impl Into<String>) -> Self {
        CoreError::UnknownEntity {
            entity: "Product",
            id: id.into(),
        }
    }

    pub fn unknown_customer(id: impl Into<String>) -> Self {
        CoreError::UnknownEntity {
            entity: "Customer",
            id: id.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for catalog and registry entries.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g. SKU with spaces, email without '@').
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value must be zero or more.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value outside the accepted range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CoreError::EmptyCart.to_string(), "Cart is empty");
        assert_eq!(
            CoreError::unknown_product("p-42").to_string(),
            "Product not found: p-42"
        );
        assert_eq!(
            CoreError::InvalidDiscount { discount_cents: -100 }.to_string(),
            "Invalid discount: -100 cents"
        );
        assert_eq!(
            CoreError::QuantityTooLarge {
                requested: 5000,
                max: 999
            }
            .to_string(),
            "Quantity 5000 exceeds maximum allowed (999)"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "sku".to_string(),
        };
        assert_eq!(err.to_string(), "sku is required");

        let err = ValidationError::MustBeNonNegative {
            field: "selling price".to_string(),
        };
        assert_eq!(err.to_string(), "selling price must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
