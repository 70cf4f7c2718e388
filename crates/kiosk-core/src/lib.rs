//! # kiosk-core: Pure Business Logic for the Kiosk Store
//!
//! This crate is the **heart** of Kiosk. It holds every business rule of the
//! store as plain functions and methods with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Kiosk Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 kiosk-cli (interactive shell)                   │   │
//! │  │   menu ──► parse_integer ──► store operation ──► render message │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ direct calls                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kiosk-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   money   │  │   cart    │  │   store   │  │   │
//! │  │   │  Catalog  │  │   Money   │  │   Cart    │  │   Store   │  │   │
//! │  │   │  Product  │  │  parse    │  │ CartLine  │  │  checkout │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO STDIN • NO STDOUT • NO FILES • PURE STATE TRANSITIONS     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, LineItem, CartView, Receipt)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Immutable, insertion-ordered product catalog
//! - [`cart`] - Code → quantity accumulation
//! - [`store`] - The five store operations
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary parsing and field rules
//!
//! ## Example Usage
//!
//! ```rust
//! use kiosk_core::{Money, ProductCode, Store};
//!
//! let mut store = Store::default();
//! store.add_to_cart(ProductCode::new(1), 2).unwrap(); // 2 × T-shirt at 13.00
//!
//! let receipt = store.checkout().unwrap();
//! assert_eq!(receipt.remaining_balance, Money::from_cents(12400));
//! assert!(store.is_cart_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine};
pub use catalog::Catalog;
pub use error::{CatalogError, StoreError, StoreResult, ValidationError};
pub use money::Money;
pub use store::Store;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Opening balance of a default store (150.00).
pub const DEFAULT_BALANCE: Money = Money::from_major_minor(150, 0);

/// Maximum accumulated quantity of a single cart line.
///
/// Keeps `price × quantity` far away from i64 overflow.
pub const MAX_LINE_QUANTITY: i64 = 1_000_000;

/// Maximum number of products in one catalog.
///
/// With the price and quantity ceilings this bounds a cart total at 10^18
/// cents, below `i64::MAX`.
pub const MAX_CATALOG_SIZE: usize = 10_000;

/// Maximum unit price accepted into a catalog (1,000,000.00).
pub const MAX_PRICE_CENTS: i64 = 100_000_000;

/// Maximum product name length in characters.
pub const MAX_NAME_LENGTH: usize = 200;
