//! The display capability a cart draws through.
//!
//! A surface owns two regions: the cart container, holding one element per
//! line, and the total price text. The cart tells it when to rebuild the
//! container, when to patch a single line, and when to refresh the total.

use pocket_cart_core::{Price, ProductId};
use thiserror::Error;

use crate::view::{CartItemView, CartView};

/// Errors a surface can report while drawing.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A template failed to render.
    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),

    /// A patch targeted a line the surface never drew.
    #[error("no rendered line for product {0}")]
    MissingLine(ProductId),
}

/// A display surface for a cart.
pub trait Render {
    /// Clear the cart container and repopulate it from `cart`.
    ///
    /// Must fully replace prior content so repeated calls never accumulate
    /// stale lines.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the surface cannot draw the view.
    fn redraw(&mut self, cart: &CartView) -> Result<(), RenderError>;

    /// Update one already-drawn line in place.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::MissingLine` if `line` was never drawn.
    fn patch_line(&mut self, line: &CartItemView) -> Result<(), RenderError>;

    /// Replace the total price text.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the surface cannot draw the total.
    fn show_total(&mut self, total: Price) -> Result<(), RenderError>;
}

impl<R: Render + ?Sized> Render for Box<R> {
    fn redraw(&mut self, cart: &CartView) -> Result<(), RenderError> {
        (**self).redraw(cart)
    }

    fn patch_line(&mut self, line: &CartItemView) -> Result<(), RenderError> {
        (**self).patch_line(line)
    }

    fn show_total(&mut self, total: Price) -> Result<(), RenderError> {
        (**self).show_total(total)
    }
}

impl<R: Render + ?Sized> Render for &mut R {
    fn redraw(&mut self, cart: &CartView) -> Result<(), RenderError> {
        (**self).redraw(cart)
    }

    fn patch_line(&mut self, line: &CartItemView) -> Result<(), RenderError> {
        (**self).patch_line(line)
    }

    fn show_total(&mut self, total: Price) -> Result<(), RenderError> {
        (**self).show_total(total)
    }
}
