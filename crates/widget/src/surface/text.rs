//! Plain-text surface for terminals.

use pocket_cart_core::{Price, ProductId};

use crate::render::{Render, RenderError};
use crate::view::{CartItemView, CartView, total_label};

const EMPTY_CART: &str = "(cart is empty)";

/// Renders the cart as one text line per entry followed by the total.
#[derive(Debug, Default)]
pub struct TextSurface {
    lines: Vec<(ProductId, String)>,
    total: String,
}

impl TextSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered text of one line.
    #[must_use]
    pub fn line(&self, id: ProductId) -> Option<&str> {
        self.lines
            .iter()
            .find(|(line_id, _)| *line_id == id)
            .map(|(_, text)| text.as_str())
    }

    /// The current total label, empty before the first refresh.
    #[must_use]
    pub fn total_text(&self) -> &str {
        &self.total
    }

    /// The whole screen: every line, then the total.
    #[must_use]
    pub fn screen(&self) -> String {
        let mut out = String::new();
        if self.lines.is_empty() {
            out.push_str(EMPTY_CART);
            out.push('\n');
        }
        for (_, text) in &self.lines {
            out.push_str(text);
            out.push('\n');
        }
        out.push_str(&self.total);
        out.push('\n');
        out
    }
}

fn format_line(line: &CartItemView) -> String {
    let mut text = format!(
        "[{}] {}  Quantity: {}  @ {} = {}",
        line.id, line.name, line.quantity, line.unit_price, line.line_price
    );
    if line.liked {
        text.push_str("  (liked)");
    }
    text
}

impl Render for TextSurface {
    fn redraw(&mut self, cart: &CartView) -> Result<(), RenderError> {
        self.lines = cart
            .items
            .iter()
            .map(|line| (line.id, format_line(line)))
            .collect();
        Ok(())
    }

    fn patch_line(&mut self, line: &CartItemView) -> Result<(), RenderError> {
        let slot = self
            .lines
            .iter_mut()
            .find(|(id, _)| *id == line.id)
            .ok_or(RenderError::MissingLine(line.id))?;
        slot.1 = format_line(line);
        Ok(())
    }

    fn show_total(&mut self, total: Price) -> Result<(), RenderError> {
        self.total = total_label(total);
        Ok(())
    }
}
