//! # Catalog
//!
//! The fixed set of purchasable products, keyed by [`ProductCode`].
//!
//! Products are stored in insertion order so listings are reproducible.
//! Once built, a catalog exposes no way to add or remove products.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{CatalogError, ValidationError};
use crate::money::Money;
use crate::types::{Product, ProductCode};
use crate::validation::{validate_price_cents, validate_product_name};
use crate::MAX_CATALOG_SIZE;

/// Insertion-ordered, immutable product catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from products, validating every entry.
    ///
    /// ## Rules
    /// - At least one product, at most [`MAX_CATALOG_SIZE`]
    /// - Codes are unique
    /// - Names are non-empty; prices are non-negative
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        if products.is_empty() {
            return Err(CatalogError::Empty);
        }
        if products.len() > MAX_CATALOG_SIZE {
            return Err(CatalogError::TooLarge {
                count: products.len(),
                max: MAX_CATALOG_SIZE,
            });
        }

        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            let invalid = |source: ValidationError| CatalogError::InvalidProduct {
                code: product.code,
                source,
            };

            if !seen.insert(product.code) {
                return Err(invalid(ValidationError::Duplicate {
                    field: "code".to_string(),
                    value: product.code.to_string(),
                }));
            }
            validate_product_name(&product.name).map_err(invalid)?;
            validate_price_cents(product.price.cents()).map_err(invalid)?;
        }

        debug!(products = products.len(), "catalog built");
        Ok(Catalog { products })
    }

    /// Parses a JSON array of products.
    ///
    /// ```rust
    /// use kiosk_core::catalog::Catalog;
    ///
    /// let catalog = Catalog::from_json(r#"[
    ///     { "code": 7, "name": "Scarf", "price_cents": 1250 }
    /// ]"#).unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Catalog::new(products)
    }

    /// Looks up a product by code.
    pub fn get(&self, code: ProductCode) -> Option<&Product> {
        self.products.iter().find(|p| p.code == code)
    }

    /// All products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// The five-product clothing catalog the store opens with.
impl Default for Catalog {
    fn default() -> Self {
        Catalog {
            products: vec![
                Product::new(1, "T-shirt", Money::from_major_minor(13, 0)),
                Product::new(2, "Jeans", Money::from_major_minor(40, 0)),
                Product::new(3, "Shirt", Money::from_major_minor(30, 0)),
                Product::new(4, "Coat", Money::from_major_minor(60, 0)),
                Product::new(5, "Sneakers", Money::from_major_minor(45, 0)),
            ],
        }
    }
}
