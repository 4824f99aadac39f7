//! Integration tests for Pocket Cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p pocket-cart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - End-to-end cart flows against the recording and HTML surfaces
//! - `cart_properties` - Property tests over random event sequences
//!
//! This library only holds shared fixtures.

use pocket_cart_core::{Price, Product};

/// Build a product with a whole-unit price.
#[must_use]
pub fn product(id: i32, price: u32) -> Product {
    Product::new(
        id,
        format!("Item {id}"),
        Price::from_units(price),
        format!("./img/{id}.webp"),
    )
}

