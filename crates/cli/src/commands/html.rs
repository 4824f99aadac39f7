//! Render the cart page as an HTML document.

use pocket_cart_core::Catalog;
use pocket_cart_widget::{Cart, CartEvent, HtmlSurface, WidgetConfig};

/// Build a cart, apply `events` in order, and return the page HTML.
///
/// When `seed` is set every catalog product is added once first.
///
/// # Errors
///
/// Returns an error if an event does not parse, names an unknown product,
/// or the page fails to render.
pub fn render(
    catalog: &Catalog,
    config: &WidgetConfig,
    events: &[String],
    seed: bool,
) -> Result<String, pocket_cart_widget::Error> {
    let mut cart = Cart::from_config(HtmlSurface::new(config.regions.clone()), config);
    if seed {
        super::seed(&mut cart, catalog)?;
    } else {
        cart.display_cart()?;
    }

    for event in events {
        let event: CartEvent = event.parse()?;
        cart.apply(event, catalog)?;
    }
    tracing::info!(entries = cart.len(), total = %cart.total_price(), "Rendered cart page");

    Ok(cart.surface().document()?)
}
