//! # API Error Type
//!
//! Unified error type for register commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in OmniPOS                                │
//! │                                                                         │
//! │  UI                          Register                                   │
//! │  ──                          ────────                                   │
//! │                                                                         │
//! │  {"cmd":"processSale",...}                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Core Error? ─── CoreError::EmptyCart ──────► ApiError ─────────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  {"ok":false,"error":{"code":"EMPTY_CART","message":"Cart is empty"}}  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `RegisterError` is separate: it covers the session itself (stdin/stdout)
//! and ends the process rather than being reported to the UI.

use serde::Serialize;
use thiserror::Error;

use omnipos_core::CoreError;

/// API error returned from register commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 1b4e28ba-..."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown product, customer or sale id
    NotFound,

    /// Input validation failed, including malformed commands
    ValidationError,

    /// Checkout with nothing in the cart
    EmptyCart,

    /// Business rule rejected the request (e.g. negative discount)
    BusinessLogic,

    /// Internal error (response could not be encoded)
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EmptyCart => ApiError::new(ErrorCode::EmptyCart, err.to_string()),
            CoreError::UnknownEntity { entity, ref id } => ApiError::not_found(entity, id),
            CoreError::InvalidDiscount { .. } | CoreError::CartFull { .. } => {
                ApiError::new(ErrorCode::BusinessLogic, err.to_string())
            }
            CoreError::QuantityTooLarge { .. } => ApiError::validation(err.to_string()),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Failures of the register session itself.
#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("I/O error on command stream: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use omnipos_core::ValidationError;

    #[test]
    fn test_core_error_mapping() {
        let err = ApiError::from(CoreError::EmptyCart);
        assert_eq!(err.code, ErrorCode::EmptyCart);
        assert_eq!(err.message, "Cart is empty");

        let err = ApiError::from(CoreError::unknown_customer("c9"));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Customer not found: c9");

        let err = ApiError::from(CoreError::InvalidDiscount { discount_cents: -5 });
        assert_eq!(err.code, ErrorCode::BusinessLogic);

        let err = ApiError::from(CoreError::CartFull { max: 100 });
        assert_eq!(err.code, ErrorCode::BusinessLogic);

        let err = ApiError::from(CoreError::QuantityTooLarge {
            requested: 1000,
            max: 999,
        });
        assert_eq!(
            err,
            ApiError::validation("Quantity 1000 exceeds maximum allowed (999)")
        );

        let err = ApiError::from(CoreError::from(ValidationError::Required {
            field: "sku".to_string(),
        }));
        assert_eq!(err, ApiError::validation("sku is required"));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::not_found("Sale", "s1")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": "NOT_FOUND", "message": "Sale not found: s1" })
        );
    }
}
