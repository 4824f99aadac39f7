//! Display-ready snapshots of the cart.
//!
//! Surfaces never see cart entries directly; they draw these views, which
//! carry preformatted prices.

use pocket_cart_core::{Price, ProductId};
use serde::Serialize;

use crate::cart::CartEntry;

/// Label shown in the total price region.
#[must_use]
pub fn total_label(total: Price) -> String {
    format!("Total Price: {total}")
}

/// One cart line as a surface draws it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemView {
    pub id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_price: String,
    pub image: String,
    pub liked: bool,
}

impl From<&CartEntry> for CartItemView {
    fn from(entry: &CartEntry) -> Self {
        let product = entry.product();
        Self {
            id: product.id,
            name: product.name.clone(),
            quantity: entry.quantity(),
            unit_price: product.price.to_string(),
            line_price: entry.line_price().to_string(),
            image: product.image.clone(),
            liked: product.is_liked,
        }
    }
}

/// The whole cart as a surface draws it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: Price::ZERO.to_string(),
            item_count: 0,
        }
    }

    /// Build a view from cart entries, in display order.
    #[must_use]
    pub fn from_entries(entries: &[CartEntry]) -> Self {
        let total: Price = entries.iter().map(CartEntry::line_price).sum();
        Self {
            items: entries.iter().map(CartItemView::from).collect(),
            total: total.to_string(),
            item_count: entries
                .iter()
                .fold(0_u32, |count, entry| count.saturating_add(entry.quantity())),
        }
    }

    /// Whether the view has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
