//! Product records.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A purchasable product.
///
/// Everything except `is_liked` is fixed once the product is created;
/// identity is by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Image reference (path or URL).
    pub image: String,
    /// Whether the user has liked this product.
    #[serde(default)]
    pub is_liked: bool,
}

impl Product {
    /// Create a new, not-yet-liked product.
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Price,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
            is_liked: false,
        }
    }

    /// Flip the liked flag and return its new value.
    pub const fn toggle_like(&mut self) -> bool {
        self.is_liked = !self.is_liked;
        self.is_liked
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_like() {
        let mut product = Product::new(1, "Item 1", Price::from_units(10), "./img/a.webp");
        assert!(!product.is_liked);
        assert!(product.toggle_like());
        assert!(!product.toggle_like());
        assert_eq!(product.price, Price::from_units(10));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"id": 4, "name": "Item 4", "price": "15", "image": "./img/nike.png", "isLiked": true}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(4));
        assert!(product.is_liked);
    }

    #[test]
    fn test_is_liked_defaults_to_false() {
        let json = r#"{"id": 1, "name": "Item 1", "price": "10", "image": "a.png"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(!product.is_liked);
    }
}
