//! HTML surface rendered with Askama templates.
//!
//! The surface keeps one rendered fragment per cart line inside the cart
//! container region, plus the total price text. Each line carries its
//! controls as buttons tagged with `data-action` and `data-product-id`, which
//! parse back into [`CartEvent`](crate::event::CartEvent)s.

use askama::Template;
use pocket_cart_core::{Price, ProductId};

use crate::config::RegionIds;
use crate::render::{Render, RenderError};
use crate::view::{CartItemView, CartView, total_label};

/// A single cart line.
#[derive(Template)]
#[template(path = "cart/line.html")]
struct LineTemplate<'a> {
    line: &'a CartItemView,
}

/// The full page: cart container and total region.
#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    regions: &'a RegionIds,
    lines: Vec<&'a str>,
    total: &'a str,
}

#[derive(Debug)]
struct RenderedLine {
    id: ProductId,
    html: String,
}

fn render_line(line: &CartItemView) -> Result<String, RenderError> {
    Ok(LineTemplate { line }.render()?)
}

/// In-memory HTML document for the cart.
#[derive(Debug)]
pub struct HtmlSurface {
    regions: RegionIds,
    lines: Vec<RenderedLine>,
    total: String,
    redraws: usize,
}

impl HtmlSurface {
    #[must_use]
    pub const fn new(regions: RegionIds) -> Self {
        Self {
            regions,
            lines: Vec::new(),
            total: String::new(),
            redraws: 0,
        }
    }

    #[must_use]
    pub const fn regions(&self) -> &RegionIds {
        &self.regions
    }

    /// Inner HTML of the cart container.
    #[must_use]
    pub fn container_html(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.html.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Rendered fragment of one line.
    #[must_use]
    pub fn line_html(&self, id: ProductId) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.id == id)
            .map(|line| line.html.as_str())
    }

    /// Number of lines currently in the container.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Text of the total price region.
    #[must_use]
    pub fn total_text(&self) -> &str {
        &self.total
    }

    /// How many full redraws have happened.
    #[must_use]
    pub const fn redraw_count(&self) -> usize {
        self.redraws
    }

    /// Assemble the complete HTML document.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Template` if the page template fails.
    pub fn document(&self) -> Result<String, RenderError> {
        let page = PageTemplate {
            regions: &self.regions,
            lines: self.lines.iter().map(|line| line.html.as_str()).collect(),
            total: &self.total,
        };
        Ok(page.render()?)
    }
}

impl Default for HtmlSurface {
    fn default() -> Self {
        Self::new(RegionIds::default())
    }
}

impl Render for HtmlSurface {
    fn redraw(&mut self, cart: &CartView) -> Result<(), RenderError> {
        // Render everything before touching the container so a failure
        // leaves the previous content intact.
        let lines = cart
            .items
            .iter()
            .map(|line| {
                Ok(RenderedLine {
                    id: line.id,
                    html: render_line(line)?,
                })
            })
            .collect::<Result<Vec<_>, RenderError>>()?;
        self.lines = lines;
        self.redraws += 1;
        Ok(())
    }

    fn patch_line(&mut self, line: &CartItemView) -> Result<(), RenderError> {
        let html = render_line(line)?;
        let slot = self
            .lines
            .iter_mut()
            .find(|rendered| rendered.id == line.id)
            .ok_or(RenderError::MissingLine(line.id))?;
        slot.html = html;
        Ok(())
    }

    fn show_total(&mut self, total: Price) -> Result<(), RenderError> {
        self.total = total_label(total);
        Ok(())
    }
}
