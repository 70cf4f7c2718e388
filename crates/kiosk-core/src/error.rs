//! # Error Types
//!
//! Domain-specific error types for kiosk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kiosk-core errors (this file)                                         │
//! │  ├── StoreError       - Store operation failures (user-facing)         │
//! │  ├── ValidationError  - Field rule failures (catalog, amounts)         │
//! │  └── CatalogError     - Catalog file could not be turned into a Catalog│
//! │                                                                         │
//! │  kiosk-cli errors (app)                                                │
//! │  └── ConfigError      - Start-up configuration failures                │
//! │                                                                         │
//! │  Flow: StoreError ──► shell pattern-matches ──► "Error: ..." line      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (code, quantity, amounts)
//! 3. Errors are enum variants, never String
//! 4. Every `StoreError` is recoverable: the menu loop never ends because of one

use thiserror::Error;

use crate::money::Money;
use crate::types::ProductCode;

// =============================================================================
// Store Error
// =============================================================================

/// Failures of the store's operations.
///
/// Each variant maps to exactly one user-facing message. The shell renders
/// them with its configured currency symbol; the `Display` text here uses
/// plain two-decimal amounts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The product code is not a key of the catalog.
    #[error("Product with code {0} does not exist in the catalog")]
    InvalidProduct(ProductCode),

    /// A quantity of zero or less was requested.
    #[error("Invalid quantity: {0}. Must be a positive number")]
    InvalidQuantity(i64),

    /// Text that should have been a whole number was not.
    ///
    /// ## When This Occurs
    /// ```text
    /// Product code: abc
    ///      │
    ///      ▼
    /// parse_integer("product code", "abc")
    ///      │
    ///      ▼
    /// InvalidInput { field: "product code", raw: "abc" }
    /// ```
    #[error("{field} must be a whole number, got '{raw}'")]
    InvalidInput { field: String, raw: String },

    /// Accumulated line quantity would pass the per-line ceiling.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Checkout was attempted with no cart lines.
    #[error("The cart is empty. Add products before checking out")]
    EmptyCart,

    /// Checkout total is larger than the available balance.
    #[error("Insufficient balance. You have {balance}, but need {total}")]
    InsufficientBalance { balance: Money, total: Money },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level validation errors.
///
/// Raised while building a catalog or parsing configured amounts, before a
/// store exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value has an invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two products sharing a code).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Catalog Error
// =============================================================================

/// Errors raised when turning a catalog document into a [`Catalog`](crate::catalog::Catalog).
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog must contain at least one product")]
    Empty,

    #[error("catalog has {count} products, the limit is {max}")]
    TooLarge { count: usize, max: usize },

    #[error("invalid product {code}: {source}")]
    InvalidProduct {
        code: ProductCode,
        #[source]
        source: ValidationError,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_messages() {
        assert_eq!(
            StoreError::InvalidProduct(ProductCode::new(9)).to_string(),
            "Product with code 9 does not exist in the catalog"
        );
        assert_eq!(
            StoreError::InvalidQuantity(-5).to_string(),
            "Invalid quantity: -5. Must be a positive number"
        );

        let err = StoreError::InsufficientBalance {
            balance: Money::from_cents(1000),
            total: Money::from_cents(2600),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient balance. You have 10.00, but need 26.00"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Duplicate {
            field: "code".to_string(),
            value: "1".to_string(),
        };
        assert_eq!(err.to_string(), "code '1' already exists");
    }

    #[test]
    fn test_catalog_error_keeps_source() {
        let err = CatalogError::InvalidProduct {
            code: ProductCode::new(3),
            source: ValidationError::Required {
                field: "name".to_string(),
            },
        };
        assert_eq!(err.to_string(), "invalid product 3: name is required");
        assert!(std::error::Error::source(&err).is_some());
    }
}
