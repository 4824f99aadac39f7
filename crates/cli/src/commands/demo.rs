//! Seed the cart with every catalog product and print it.

use std::io::Write;

use pocket_cart_core::Catalog;
use pocket_cart_widget::{Cart, TextSurface, WidgetConfig};

/// Run the demo, writing the rendered cart to `out`.
///
/// # Errors
///
/// Returns an error if rendering, serialization or writing fails.
pub fn run<W: Write>(
    catalog: &Catalog,
    config: &WidgetConfig,
    json: bool,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cart = Cart::from_config(TextSurface::new(), config);
    super::seed(&mut cart, catalog)?;
    tracing::info!(entries = cart.len(), total = %cart.total_price(), "Seeded cart");

    if json {
        serde_json::to_writer_pretty(&mut *out, &cart.view())?;
        writeln!(out)?;
    } else {
        write!(out, "{}", cart.surface().screen())?;
    }
    Ok(())
}
