//! # Domain Types
//!
//! Core domain types used throughout the store.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    LineItem     │   │    Receipt      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  code           │   │  code, name     │   │  id (UUID)      │       │
//! │  │  name           │   │  quantity       │   │  completed_at   │       │
//! │  │  price (Money)  │   │  unit_price     │   │  lines, total   │       │
//! │  └─────────────────┘   │  subtotal       │   │  remaining      │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │   ProductCode   │   │    CartView     │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  i64 newtype    │   │  Empty          │                             │
//! │  │  assigned by    │   │  Items{..,total}│                             │
//! │  │  the catalog    │   └─────────────────┘                             │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! `LineItem` and `Receipt` copy the product name and price at the moment
//! they are produced, so a receipt stays readable on its own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Product Code
// =============================================================================

/// Externally assigned product identifier.
///
/// Signed so that any whole number typed at the menu is a representable code;
/// negative codes simply never appear in a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCode(i64);

impl ProductCode {
    #[inline]
    pub const fn new(code: i64) -> Self {
        ProductCode(code)
    }

    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ProductCode {
    fn from(code: i64) -> Self {
        ProductCode(code)
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Catalog files spell the price as integer cents:
/// ```json
/// { "code": 1, "name": "T-shirt", "price_cents": 1300 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog key.
    pub code: ProductCode,

    /// Display name shown in listings and receipts.
    pub name: String,

    /// Unit price.
    #[serde(rename = "price_cents")]
    pub price: Money,
}

impl Product {
    pub fn new(code: i64, name: impl Into<String>, price: Money) -> Self {
        Product {
            code: ProductCode::new(code),
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One priced cart line, as shown by the cart view and printed on receipts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub code: ProductCode,
    /// Product name at the time the line was priced.
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    /// `unit_price × quantity`.
    pub subtotal: Money,
}

// =============================================================================
// Cart View
// =============================================================================

/// Result of viewing the cart.
///
/// An empty cart is a normal outcome here, not an error; only checkout
/// treats it as one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CartView {
    /// No lines in the cart.
    Empty,
    /// Priced lines in insertion order plus their sum.
    Items { lines: Vec<LineItem>, total: Money },
}

impl CartView {
    /// Cart total; zero for an empty cart.
    pub fn total(&self) -> Money {
        match self {
            CartView::Empty => Money::zero(),
            CartView::Items { total, .. } => *total,
        }
    }

    pub fn lines(&self) -> &[LineItem] {
        match self {
            CartView::Empty => &[],
            CartView::Items { lines, .. } => lines,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CartView::Empty)
    }
}

// =============================================================================
// Operation Results
// =============================================================================

/// Confirmation data for a successful add-to-cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedToCart {
    pub code: ProductCode,
    pub name: String,
    /// Quantity added by this call.
    pub quantity_added: i64,
    /// Quantity of this product in the cart after the call.
    pub quantity_in_cart: i64,
}

/// Snapshot of a completed checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: Uuid,
    pub completed_at: DateTime<Utc>,
    pub lines: Vec<LineItem>,
    pub total: Money,
    /// Balance left after the total was deducted.
    pub remaining_balance: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
