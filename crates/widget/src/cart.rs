//! The shopping cart.
//!
//! A [`Cart`] owns its entries and the surface it draws into. Every
//! mutation updates state first and then refreshes the surface: additions
//! and removals redraw the whole container, while the `+`, `-` and `Like`
//! controls patch just their line (see [`RedrawPolicy`]).
//!
//! Like state is remembered per product id for the life of the cart, so a
//! product that is deleted and added again comes back with the same flag.
//!
//! Mutations take `&mut self`, so one handler always runs to completion
//! before the next can start.

use std::collections::BTreeMap;

use pocket_cart_core::{Catalog, Price, Product, ProductId};
use tracing::{debug, instrument, warn};

use crate::config::{RedrawPolicy, WidgetConfig};
use crate::error::{Error, Result};
use crate::event::CartEvent;
use crate::render::Render;
use crate::view::{CartItemView, CartView};

/// A product together with how many of it are in the cart.
///
/// The quantity is always at least 1 while the entry exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    product: Product,
    quantity: u32,
}

impl CartEntry {
    pub(crate) const fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// The cart's copy of the product.
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_price(&self) -> Price {
        self.product.price.times(self.quantity)
    }

    pub(crate) const fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }
}

/// An ordered collection of cart entries bound to a display surface.
#[derive(Debug)]
pub struct Cart<R> {
    entries: Vec<CartEntry>,
    surface: R,
    policy: RedrawPolicy,
    likes: BTreeMap<ProductId, bool>,
}

impl<R: Render> Cart<R> {
    /// Create an empty cart using the default redraw policy.
    ///
    /// Nothing is drawn until the first mutation or [`Cart::display_cart`].
    pub fn new(surface: R) -> Self {
        Self::with_policy(surface, RedrawPolicy::default())
    }

    /// Create an empty cart with an explicit redraw policy.
    pub const fn with_policy(surface: R, policy: RedrawPolicy) -> Self {
        Self {
            entries: Vec::new(),
            surface,
            policy,
            likes: BTreeMap::new(),
        }
    }

    /// Create an empty cart configured from `config`.
    pub const fn from_config(surface: R, config: &WidgetConfig) -> Self {
        Self::with_policy(surface, config.redraw)
    }

    /// Add one of `product`, then redraw.
    ///
    /// An existing entry for the same id has its quantity bumped; otherwise a
    /// new entry with quantity 1 is appended.
    ///
    /// # Errors
    ///
    /// Returns `Error::Render` if the surface fails to draw. The entry is
    /// added regardless.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_item(&mut self, product: &Product) -> Result<()> {
        if let Some(entry) = self.entry_mut(product.id) {
            entry.increment();
            debug!(quantity = entry.quantity, "Incremented existing entry");
        } else {
            let mut product = product.clone();
            if let Some(liked) = self.likes.get(&product.id) {
                product.is_liked = *liked;
            }
            self.entries.push(CartEntry::new(product));
            debug!(entries = self.entries.len(), "Added new entry");
        }
        self.display_cart()
    }

    /// Remove the entry for `product_id` if present, then redraw.
    ///
    /// Removing an absent id leaves the entries unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Error::Render` if the surface fails to draw.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, product_id: ProductId) -> Result<()> {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.product.id != product_id);
        if self.entries.len() == before {
            debug!("No entry to remove");
        } else {
            debug!(entries = self.entries.len(), "Removed entry");
        }
        self.display_cart()
    }

    /// Sum of unit price times quantity over all entries.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.entries.iter().map(CartEntry::line_price).sum()
    }

    /// Redraw every line from current state, then refresh the total.
    ///
    /// # Errors
    ///
    /// Returns `Error::Render` if the surface fails to draw.
    pub fn display_cart(&mut self) -> Result<()> {
        let view = self.view();
        self.surface.redraw(&view)?;
        self.update_total_price()
    }

    /// Refresh only the total price text.
    ///
    /// # Errors
    ///
    /// Returns `Error::Render` if the surface fails to draw.
    pub fn update_total_price(&mut self) -> Result<()> {
        let total = self.total_price();
        self.surface.show_total(total)?;
        Ok(())
    }

    /// The `+` control: one more of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Render` if the surface fails to draw.
    #[instrument(skip(self))]
    pub fn increment(&mut self, product_id: ProductId) -> Result<()> {
        let line = {
            let Some(entry) = self.entry_mut(product_id) else {
                warn!("Increment for product not in cart");
                return Ok(());
            };
            entry.increment();
            debug!(quantity = entry.quantity, "Incremented quantity");
            CartItemView::from(&*entry)
        };
        self.refresh_line(&line, true)
    }

    /// The `-` control: one fewer of `product_id`.
    ///
    /// An entry at quantity 1 is removed instead of reaching 0.
    ///
    /// # Errors
    ///
    /// Returns `Error::Render` if the surface fails to draw.
    #[instrument(skip(self))]
    pub fn decrement(&mut self, product_id: ProductId) -> Result<()> {
        let line = {
            let Some(entry) = self.entry_mut(product_id) else {
                warn!("Decrement for product not in cart");
                return Ok(());
            };
            if entry.quantity > 1 {
                entry.quantity -= 1;
                debug!(quantity = entry.quantity, "Decremented quantity");
                Some(CartItemView::from(&*entry))
            } else {
                None
            }
        };
        match line {
            Some(line) => self.refresh_line(&line, true),
            None => self.remove_item(product_id),
        }
    }

    /// The `Delete` control: drop the entry whatever its quantity.
    ///
    /// # Errors
    ///
    /// Returns `Error::Render` if the surface fails to draw.
    #[instrument(skip(self))]
    pub fn delete(&mut self, product_id: ProductId) -> Result<()> {
        if self.entry(product_id).is_none() {
            warn!("Delete for product not in cart");
            return Ok(());
        }
        self.remove_item(product_id)
    }

    /// The `Like` control: flip the liked flag on the entry's product.
    ///
    /// The new flag outlives the entry and is applied again when the
    /// product is next added. Returns the new flag, or `None` if the product is not in the cart.
    /// Prices, quantities and ordering are untouched.
    ///
    /// # Errors
    ///
    /// Returns `Error::Render` if the surface fails to draw.
    #[instrument(skip(self))]
    pub fn toggle_like(&mut self, product_id: ProductId) -> Result<Option<bool>> {
        let (liked, line) = {
            let Some(entry) = self.entry_mut(product_id) else {
                warn!("Like for product not in cart");
                return Ok(None);
            };
            let liked = entry.product.toggle_like();
            debug!(liked, "Toggled like");
            (liked, CartItemView::from(&*entry))
        };
        self.likes.insert(product_id, liked);
        self.refresh_line(&line, false)?;
        Ok(Some(liked))
    }

    /// Dispatch a user event.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownProduct` if an add names a product missing from
    /// `catalog`, or `Error::Render` if the surface fails to draw.
    pub fn apply(&mut self, event: CartEvent, catalog: &Catalog) -> Result<()> {
        match event {
            CartEvent::Add(id) => {
                let product = catalog.get(id).ok_or(Error::UnknownProduct(id))?;
                self.add_item(product)
            }
            CartEvent::Remove(id) => self.remove_item(id),
            CartEvent::Increment(id) => self.increment(id),
            CartEvent::Decrement(id) => self.decrement(id),
            CartEvent::Delete(id) => self.delete(id),
            CartEvent::ToggleLike(id) => self.toggle_like(id).map(|_| ()),
        }
    }

    /// Entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// The entry for `product_id`, if any.
    #[must_use]
    pub fn entry(&self, product_id: ProductId) -> Option<&CartEntry> {
        self.entries
            .iter()
            .find(|entry| entry.product.id == product_id)
    }

    /// Quantity of `product_id`, or `None` if it is not in the cart.
    #[must_use]
    pub fn quantity_of(&self, product_id: ProductId) -> Option<u32> {
        self.entry(product_id).map(CartEntry::quantity)
    }

    /// Number of distinct products.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn policy(&self) -> RedrawPolicy {
        self.policy
    }

    /// Snapshot of the cart for display.
    #[must_use]
    pub fn view(&self) -> CartView {
        CartView::from_entries(&self.entries)
    }

    #[must_use]
    pub const fn surface(&self) -> &R {
        &self.surface
    }

    pub const fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }

    /// Tear down the cart, handing back its surface.
    pub fn into_surface(self) -> R {
        self.surface
    }

    fn entry_mut(&mut self, product_id: ProductId) -> Option<&mut CartEntry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.product.id == product_id)
    }

    /// Show a changed line according to the redraw policy.
    fn refresh_line(&mut self, line: &CartItemView, total_changed: bool) -> Result<()> {
        match self.policy {
            RedrawPolicy::LocalPatch => {
                self.surface.patch_line(line)?;
                if total_changed {
                    self.update_total_price()?;
                }
                Ok(())
            }
            RedrawPolicy::AlwaysRedraw => self.display_cart(),
        }
    }
}
