//! # Message Rendering
//!
//! Turns store results into the text the shell prints.
//!
//! Every amount goes through [`Renderer::money`], so all displayed amounts
//! carry the configured currency symbol and exactly two decimals.

use kiosk_core::{AddedToCart, CartView, Money, Product, Receipt, StoreError};

use crate::menu::MenuOption;

/// Formats shell output for one currency symbol.
#[derive(Debug, Clone)]
pub struct Renderer {
    currency_symbol: String,
}

impl Renderer {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Renderer {
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn money(&self, amount: Money) -> String {
        amount.format_with(&self.currency_symbol)
    }

    pub fn welcome(&self, store_name: &str) -> String {
        format!("Welcome to {}!", store_name)
    }

    pub fn menu(&self) -> String {
        let mut text = String::new();
        for option in MenuOption::ALL {
            text.push_str(&format!("\n{}. {}", option.key(), option.label()));
        }
        text
    }

    pub fn products(&self, products: &[Product]) -> String {
        let mut text = String::from("\n--- Catalog ---");
        for product in products {
            text.push_str(&format!(
                "\n{}: {} - {}",
                product.code,
                product.name,
                self.money(product.price)
            ));
        }
        text
    }

    pub fn added(&self, added: &AddedToCart) -> String {
        format!("{}x '{}' added to cart.", added.quantity_added, added.name)
    }

    /// Cart breakdown, or the empty-cart notice.
    pub fn cart(&self, view: &CartView) -> String {
        match view {
            CartView::Empty => "\nThe cart is empty.".to_string(),
            CartView::Items { lines, total } => {
                let mut text = String::from("\n--- Cart ---");
                for line in lines {
                    text.push_str(&format!(
                        "\n{} ({}x) - {}",
                        line.name,
                        line.quantity,
                        self.money(line.subtotal)
                    ));
                }
                text.push_str(&format!("\nTotal: {}", self.money(*total)));
                text
            }
        }
    }

    pub fn receipt(&self, receipt: &Receipt) -> String {
        format!(
            "\nPurchase completed! Remaining balance: {}",
            self.money(receipt.remaining_balance)
        )
    }

    pub fn balance(&self, balance: Money) -> String {
        format!("Current balance: {}", self.money(balance))
    }

    /// One user-facing line per error kind.
    pub fn error(&self, err: &StoreError) -> String {
        let message = match err {
            StoreError::InvalidProduct(code) => {
                format!("Product with code {} does not exist in the catalog.", code)
            }
            StoreError::InvalidQuantity(qty) => {
                format!("Invalid quantity: {}. Must be a positive number.", qty)
            }
            StoreError::InvalidInput { .. } => "please enter valid numbers.".to_string(),
            StoreError::QuantityTooLarge { max, .. } => {
                format!("A product can be added at most {} times to the cart.", max)
            }
            StoreError::EmptyCart => {
                "The cart is empty. Add products before checking out.".to_string()
            }
            StoreError::InsufficientBalance { balance, total } => format!(
                "Insufficient balance. You have {}, but need {}.",
                self.money(*balance),
                self.money(*total)
            ),
        };
        format!("Error: {}", message)
    }

    pub fn invalid_option(&self) -> String {
        "Invalid option.".to_string()
    }

    pub fn farewell(&self) -> String {
        "Thank you for visiting the store!".to_string()
    }
}
