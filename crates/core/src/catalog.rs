//! The catalog of purchasable products.
//!
//! A catalog is built once at startup, either from the built-in sample
//! records or from a JSON array, and is read-only afterwards.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::types::{Price, Product, ProductId};

/// Errors that can occur when building a [`Catalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two products share the same id.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
    /// The JSON input could not be parsed.
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// An ordered, immutable list of products with unique ids.
///
/// Serializes as the same JSON array [`Catalog::from_json`] reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, checking that product ids are unique.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] for the first repeated id.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self { products })
    }

    /// The four built-in demo products.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            products: vec![
                Product::new(1, "Item 1", Price::from_units(10), "./img/987ca2af.webp"),
                Product::new(2, "Item 2", Price::from_units(20), "./img/bff3c1c2.webp"),
                Product::new(3, "Item 3", Price::from_units(15), "./img/f9645056.webp"),
                Product::new(4, "Item 4", Price::from_units(15), "./img/nike.png"),
            ],
        }
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// Prices may be given as strings or numbers; negative prices are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON or invalid prices,
    /// and [`CatalogError::DuplicateId`] for repeated ids.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Iterate over products in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Number of products.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
