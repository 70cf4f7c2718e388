//! # Store
//!
//! Owns the catalog, the cart and the balance, and is the only thing that
//! mutates the cart or the balance.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │            add_to_cart                   add_to_cart                    │
//! │   ┌──────────┐ ───────────────► ┌──────────┐ ◄──┐                       │
//! │   │  Empty   │                  │ NonEmpty │ ───┘ (quantities add up)  │
//! │   └──────────┘ ◄─────────────── └──────────┘                           │
//! │     │   ▲      checkout (ok)         │                                  │
//! │     └───┘                            └─► checkout (InsufficientBalance) │
//! │  checkout → EmptyCart                    no change                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Checkout Atomicity
//! `checkout` runs every check before touching state, then deducts the total
//! and clears the cart inside the same `&mut self` call. A failed checkout
//! leaves cart and balance exactly as they were.

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::cart::{Cart, CartLine};
use crate::catalog::Catalog;
use crate::error::{StoreError, StoreResult, ValidationError};
use crate::money::Money;
use crate::types::{AddedToCart, CartView, LineItem, Product, ProductCode, Receipt};
use crate::validation::{validate_balance, validate_quantity};
use crate::DEFAULT_BALANCE;

/// The virtual store.
#[derive(Debug, Clone)]
pub struct Store {
    catalog: Catalog,
    cart: Cart,
    balance: Money,
}

impl Store {
    /// Opens a store with an empty cart.
    ///
    /// Fails if `balance` is negative.
    pub fn new(catalog: Catalog, balance: Money) -> Result<Self, ValidationError> {
        validate_balance(balance)?;
        Ok(Store {
            catalog,
            cart: Cart::new(),
            balance,
        })
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Products in catalog insertion order.
    pub fn list_products(&self) -> &[Product] {
        self.catalog.products()
    }

    /// Looks up a product, failing with `InvalidProduct` for unknown codes.
    ///
    /// The shell calls this before prompting for a quantity so that an
    /// unknown code is reported the same way whether or not a quantity
    /// would have followed.
    pub fn product(&self, code: ProductCode) -> StoreResult<&Product> {
        self.catalog
            .get(code)
            .ok_or(StoreError::InvalidProduct(code))
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Adds `quantity` units of `code` to the cart.
    ///
    /// ## Validation Order
    /// 1. `InvalidProduct` - code not in catalog
    /// 2. `InvalidQuantity` - quantity <= 0
    /// 3. `QuantityTooLarge` - accumulated line over the ceiling
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::{ProductCode, Store, StoreError};
    ///
    /// let mut store = Store::default();
    /// let added = store.add_to_cart(ProductCode::new(1), 2).unwrap();
    /// assert_eq!(added.name, "T-shirt");
    ///
    /// let err = store.add_to_cart(ProductCode::new(99), -5).unwrap_err();
    /// assert_eq!(err, StoreError::InvalidProduct(ProductCode::new(99)));
    /// ```
    pub fn add_to_cart(&mut self, code: ProductCode, quantity: i64) -> StoreResult<AddedToCart> {
        let name = self.product(code)?.name.clone();
        validate_quantity(quantity)?;

        let quantity_in_cart = self.cart.add(code, quantity)?;
        debug!(
            %code,
            quantity,
            quantity_in_cart,
            lines = self.cart.item_count(),
            "added to cart"
        );

        Ok(AddedToCart {
            code,
            name,
            quantity_added: quantity,
            quantity_in_cart,
        })
    }

    /// Prices the cart against the catalog.
    ///
    /// Returns [`CartView::Empty`] for an empty cart. Never mutates.
    pub fn view_cart(&self) -> CartView {
        if self.cart.is_empty() {
            return CartView::Empty;
        }

        let lines: Vec<LineItem> = self
            .cart
            .lines()
            .iter()
            .filter_map(|line| self.price_line(line))
            .collect();
        let total = lines.iter().map(|l| l.subtotal).sum();

        CartView::Items { lines, total }
    }

    /// Read-only access to the raw cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn is_cart_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Quantity of `code` currently in the cart.
    pub fn cart_quantity(&self, code: ProductCode) -> i64 {
        self.cart.quantity(code)
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Pays for the cart with the balance.
    ///
    /// ## Flow
    /// ```text
    /// cart empty? ──yes──► EmptyCart
    ///      │no
    ///      ▼
    /// total = Σ price × qty
    ///      │
    /// balance < total? ──yes──► InsufficientBalance { balance, total }
    ///      │no
    ///      ▼
    /// balance -= total; cart.clear()  ──► Receipt
    /// ```
    pub fn checkout(&mut self) -> StoreResult<Receipt> {
        let (lines, total) = match self.view_cart() {
            CartView::Empty => return Err(StoreError::EmptyCart),
            CartView::Items { lines, total } => (lines, total),
        };

        if self.balance < total {
            debug!(balance = %self.balance, %total, "checkout refused");
            return Err(StoreError::InsufficientBalance {
                balance: self.balance,
                total,
            });
        }

        let units = self.cart.total_quantity();
        self.balance -= total;
        self.cart.clear();

        let receipt = Receipt {
            id: Uuid::new_v4(),
            completed_at: Utc::now(),
            lines,
            total,
            remaining_balance: self.balance,
        };
        info!(receipt_id = %receipt.id, units, %total, remaining = %self.balance, "checkout completed");

        Ok(receipt)
    }

    // =========================================================================
    // Balance
    // =========================================================================

    /// Current balance.
    pub fn view_balance(&self) -> Money {
        self.balance
    }

    fn price_line(&self, line: &CartLine) -> Option<LineItem> {
        // Cart codes are always catalog keys; add_to_cart checks before inserting.
        let product = self.catalog.get(line.code)?;
        Some(LineItem {
            code: line.code,
            name: product.name.clone(),
            quantity: line.quantity,
            unit_price: product.price,
            subtotal: product.price.multiply_quantity(line.quantity),
        })
    }
}

/// Default catalog with the default opening balance.
impl Default for Store {
    fn default() -> Self {
        Store {
            catalog: Catalog::default(),
            cart: Cart::new(),
            balance: DEFAULT_BALANCE,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tshirt_store(balance_cents: i64) -> Store {
        let catalog = Catalog::new(vec![Product::new(1, "T-shirt", Money::from_cents(1300))]).unwrap();
        Store::new(catalog, Money::from_cents(balance_cents)).unwrap()
    }

    fn code(n: i64) -> ProductCode {
        ProductCode::new(n)
    }

    #[test]
    fn test_default_store() {
        let store = Store::default();
        assert_eq!(store.view_balance(), Money::from_cents(15000));
        assert_eq!(store.list_products().len(), 5);
        assert!(store.is_cart_empty());
    }

    #[test]
    fn test_new_rejects_negative_balance() {
        assert!(Store::new(Catalog::default(), Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_add_to_cart_returns_confirmation() {
        let mut store = tshirt_store(15000);
        let added = store.add_to_cart(code(1), 2).unwrap();

        assert_eq!(
            added,
            AddedToCart {
                code: code(1),
                name: "T-shirt".to_string(),
                quantity_added: 2,
                quantity_in_cart: 2,
            }
        );
    }

    #[test]
    fn test_add_to_cart_accumulates() {
        let mut store = tshirt_store(15000);
        store.add_to_cart(code(1), 2).unwrap();
        let added = store.add_to_cart(code(1), 3).unwrap();

        assert_eq!(added.quantity_in_cart, 5);
        assert_eq!(store.cart_quantity(code(1)), 5);
    }

    #[test]
    fn test_invalid_product_checked_before_quantity() {
        let mut store = tshirt_store(15000);
        assert_eq!(
            store.add_to_cart(code(42), -5),
            Err(StoreError::InvalidProduct(code(42)))
        );
        assert_eq!(
            store.add_to_cart(code(1), -5),
            Err(StoreError::InvalidQuantity(-5))
        );
        assert!(store.is_cart_empty());
    }

    #[test]
    fn test_view_cart_empty_then_priced() {
        let mut store = Store::default();
        assert_eq!(store.view_cart(), CartView::Empty);
        assert!(store.view_cart().total().is_zero());

        store.add_to_cart(code(2), 1).unwrap();
        store.add_to_cart(code(1), 2).unwrap();

        let view = store.view_cart();
        let lines = view.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].name, "Jeans");
        assert_eq!(lines[1].subtotal, Money::from_cents(2600));
        assert_eq!(view.total(), Money::from_cents(6600));
    }

    #[test]
    fn test_view_cart_total_at_ceilings() {
        let products: Vec<Product> = (1..=3)
            .map(|n| Product::new(n, "Bulk", Money::from_cents(crate::MAX_PRICE_CENTS)))
            .collect();
        let mut store = Store::new(Catalog::new(products).unwrap(), Money::zero()).unwrap();
        for n in 1..=3 {
            store.add_to_cart(code(n), crate::MAX_LINE_QUANTITY).unwrap();
        }

        let expected = 3 * crate::MAX_PRICE_CENTS * crate::MAX_LINE_QUANTITY;
        assert_eq!(store.view_cart().total(), Money::from_cents(expected));
    }

    #[test]
    fn test_checkout_success() {
        let mut store = tshirt_store(15000);
        store.add_to_cart(code(1), 2).unwrap();

        let receipt = store.checkout().unwrap();

        assert_eq!(receipt.total, Money::from_cents(2600));
        assert_eq!(receipt.remaining_balance, Money::from_cents(12400));
        assert_eq!(receipt.lines.len(), 1);
        assert_eq!(store.view_balance(), Money::from_cents(12400));
        assert!(store.is_cart_empty());
    }

    #[test]
    fn test_checkout_exact_balance() {
        let mut store = tshirt_store(2600);
        store.add_to_cart(code(1), 2).unwrap();

        let receipt = store.checkout().unwrap();
        assert!(receipt.remaining_balance.is_zero());
    }

    #[test]
    fn test_checkout_empty_cart() {
        let mut store = tshirt_store(15000);
        assert_eq!(store.checkout().unwrap_err(), StoreError::EmptyCart);
        assert_eq!(store.view_balance(), Money::from_cents(15000));
    }

    #[test]
    fn test_checkout_insufficient_balance_changes_nothing() {
        let mut store = tshirt_store(1000);
        store.add_to_cart(code(1), 2).unwrap();

        let err = store.checkout().unwrap_err();

        assert_eq!(
            err,
            StoreError::InsufficientBalance {
                balance: Money::from_cents(1000),
                total: Money::from_cents(2600),
            }
        );
        assert_eq!(store.view_balance(), Money::from_cents(1000));
        assert_eq!(store.cart_quantity(code(1)), 2);
    }

    #[test]
    fn test_receipts_have_distinct_ids() {
        let mut store = tshirt_store(15000);
        store.add_to_cart(code(1), 1).unwrap();
        let first = store.checkout().unwrap();
        store.add_to_cart(code(1), 1).unwrap();
        let second = store.checkout().unwrap();

        assert_ne!(first.id, second.id);
        assert!(second.completed_at >= first.completed_at);
    }
}
