//! A surface that records what it was asked to draw.
//!
//! Used to drive a cart without any real display and assert on exactly which
//! redraws, patches and total refreshes happened.

use pocket_cart_core::{Price, ProductId};

use crate::render::{Render, RenderError};
use crate::view::{CartItemView, CartView};

/// One call made to a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    /// Full redraw with `(id, quantity)` per line, in order.
    Redraw(Vec<(ProductId, u32)>),
    /// In-place update of one line.
    PatchLine {
        id: ProductId,
        quantity: u32,
        liked: bool,
    },
    /// Total price refresh.
    ShowTotal(Price),
}

/// Fake surface that logs every call.
///
/// Patches to lines that were not part of the latest redraw fail with
/// `RenderError::MissingLine`, like they would on a real surface.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
    drawn: Vec<ProductId>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls since creation or the last [`clear`](Self::clear).
    #[must_use]
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Forget recorded calls. Drawn lines are kept.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    #[must_use]
    pub fn redraw_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, SurfaceCall::Redraw(_)))
            .count()
    }

    #[must_use]
    pub fn patch_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, SurfaceCall::PatchLine { .. }))
            .count()
    }

    /// Lines of the most recent redraw.
    #[must_use]
    pub fn last_redraw(&self) -> Option<&[(ProductId, u32)]> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::Redraw(lines) => Some(lines.as_slice()),
            _ => None,
        })
    }

    /// The most recently shown total.
    #[must_use]
    pub fn last_total(&self) -> Option<Price> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::ShowTotal(total) => Some(*total),
            _ => None,
        })
    }
}

impl Render for RecordingSurface {
    fn redraw(&mut self, cart: &CartView) -> Result<(), RenderError> {
        self.drawn = cart.items.iter().map(|line| line.id).collect();
        self.calls.push(SurfaceCall::Redraw(
            cart.items.iter().map(|line| (line.id, line.quantity)).collect(),
        ));
        Ok(())
    }

    fn patch_line(&mut self, line: &CartItemView) -> Result<(), RenderError> {
        if !self.drawn.contains(&line.id) {
            return Err(RenderError::MissingLine(line.id));
        }
        self.calls.push(SurfaceCall::PatchLine {
            id: line.id,
            quantity: line.quantity,
            liked: line.liked,
        });
        Ok(())
    }

    fn show_total(&mut self, total: Price) -> Result<(), RenderError> {
        self.calls.push(SurfaceCall::ShowTotal(total));
        Ok(())
    }
}
