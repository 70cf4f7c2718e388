//! # Cart
//!
//! Code → accumulated quantity selections made before checkout.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Store operation          Cart call               Cart change           │
//! │  ───────────────          ─────────               ───────────           │
//! │                                                                         │
//! │  add_to_cart(c, q) ─────► add(c, q) ────────────► lines[c].qty += q    │
//! │                                                   (or push new line)   │
//! │                                                                         │
//! │  view_cart() ───────────► lines() ──────────────► (read only)          │
//! │                                                                         │
//! │  checkout() ────────────► clear() ──────────────► lines.clear()        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart does not know about the catalog; the store checks product
//! existence before calling [`Cart::add`].

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};
use crate::types::ProductCode;
use crate::MAX_LINE_QUANTITY;

/// One cart entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub code: ProductCode,
    /// Always greater than zero.
    pub quantity: i64,
}

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `code` (adding the same code increases quantity)
/// - Every quantity is > 0
/// - Lines keep the order in which each code was first added
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds `quantity` of `code`, summing with any existing line.
    ///
    /// ## Returns
    /// - `Ok(new_quantity)` on success
    /// - `InvalidQuantity` if `quantity <= 0`
    /// - `QuantityTooLarge` if the line would pass `MAX_LINE_QUANTITY`;
    ///   the cart is left unchanged
    pub fn add(&mut self, code: ProductCode, quantity: i64) -> StoreResult<i64> {
        if quantity <= 0 {
            return Err(StoreError::InvalidQuantity(quantity));
        }

        let current = self.quantity(code);
        let new_qty = current
            .checked_add(quantity)
            .filter(|q| *q <= MAX_LINE_QUANTITY)
            .ok_or(StoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_LINE_QUANTITY,
            })?;

        match self.lines.iter_mut().find(|l| l.code == code) {
            Some(line) => line.quantity = new_qty,
            None => self.lines.push(CartLine {
                code,
                quantity: new_qty,
            }),
        }

        Ok(new_qty)
    }

    /// Quantity of `code` in the cart, zero when absent.
    pub fn quantity(&self, code: ProductCode) -> i64 {
        self.lines
            .iter()
            .find(|l| l.code == code)
            .map_or(0, |l| l.quantity)
    }

    /// Lines in first-added order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Returns the number of distinct products in the cart.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity of all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(n: i64) -> ProductCode {
        ProductCode::new(n)
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();

        assert_eq!(cart.add(code(1), 2), Ok(2));

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.quantity(code(1)), 2);
        assert!(!cart.is_empty());
    }

    #[test]
    fn test_cart_add_same_code_accumulates() {
        let mut cart = Cart::new();

        cart.add(code(1), 2).unwrap();
        assert_eq!(cart.add(code(1), 3), Ok(5));

        assert_eq!(cart.item_count(), 1); // Still one line
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_cart_keeps_first_added_order() {
        let mut cart = Cart::new();
        cart.add(code(3), 1).unwrap();
        cart.add(code(1), 1).unwrap();
        cart.add(code(3), 4).unwrap();

        let codes: Vec<i64> = cart.lines().iter().map(|l| l.code.value()).collect();
        assert_eq!(codes, vec![3, 1]);
    }

    #[test]
    fn test_cart_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(code(1), 0), Err(StoreError::InvalidQuantity(0)));
        assert_eq!(cart.add(code(1), -2), Err(StoreError::InvalidQuantity(-2)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_quantity_ceiling_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add(code(1), MAX_LINE_QUANTITY - 1).unwrap();

        let err = cart.add(code(1), 2).unwrap_err();
        assert_eq!(
            err,
            StoreError::QuantityTooLarge {
                requested: 2,
                max: MAX_LINE_QUANTITY
            }
        );
        assert_eq!(cart.quantity(code(1)), MAX_LINE_QUANTITY - 1);

        assert!(cart.add(code(2), i64::MAX).is_err());
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = Cart::new();
        cart.add(code(1), 2).unwrap();

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.quantity(code(1)), 0);
    }
}
