//! # Validation Module
//!
//! Input validation utilities for the store.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell boundary                                               │
//! │  └── parse_integer: raw text → i64, or InvalidInput                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Store operations                                             │
//! │  ├── product existence (InvalidProduct)                                │
//! │  └── validate_quantity (InvalidQuantity)                               │
//! │                                                                         │
//! │  Start-up only: validate_product_name, validate_price_cents,           │
//! │  validate_balance (catalog files and configured amounts)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kiosk_core::validation::{parse_integer, validate_quantity};
//!
//! let qty = parse_integer("quantity", " 2 ").unwrap();
//! assert!(validate_quantity(qty).is_ok());
//! assert!(parse_integer("quantity", "two").is_err());
//! ```

use crate::error::{StoreError, StoreResult, ValidationError};
use crate::money::Money;
use crate::{MAX_NAME_LENGTH, MAX_PRICE_CENTS};

/// Result type for field validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Boundary Parsing
// =============================================================================

/// Parses raw menu text as a whole number.
///
/// This is the only place where text becomes a number; store operations take
/// already-parsed values.
///
/// ## Example
/// ```rust
/// use kiosk_core::error::StoreError;
/// use kiosk_core::validation::parse_integer;
///
/// assert_eq!(parse_integer("product code", "3\n"), Ok(3));
/// assert!(matches!(
///     parse_integer("product code", "3.5"),
///     Err(StoreError::InvalidInput { .. })
/// ));
/// ```
pub fn parse_integer(field: &str, raw: &str) -> StoreResult<i64> {
    let text = raw.trim();
    text.parse::<i64>().map_err(|_| StoreError::InvalidInput {
        field: field.to_string(),
        raw: text.to_string(),
    })
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a requested quantity.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: i64) -> StoreResult<()> {
    if qty <= 0 {
        return Err(StoreError::InvalidQuantity(qty));
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (zero is a free item)
/// - Must not exceed MAX_PRICE_CENTS
///
/// ```rust
/// use kiosk_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1300).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates an opening balance. Balances are never negative.
pub fn validate_balance(balance: Money) -> ValidationResult<()> {
    if balance.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "balance".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product display name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most MAX_NAME_LENGTH characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
