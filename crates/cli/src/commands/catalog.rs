//! List catalog products.

use std::io::Write;

use pocket_cart_core::Catalog;

/// Write the catalog to `out` as a table or as JSON.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn list<W: Write>(
    catalog: &Catalog,
    json: bool,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        serde_json::to_writer_pretty(&mut *out, catalog)?;
        writeln!(out)?;
        return Ok(());
    }

    for product in catalog {
        writeln!(
            out,
            "{:>4}  {:<20} {:>10}  {}",
            product.id,
            product.name,
            product.price.to_string(),
            product.image
        )?;
    }
    Ok(())
}
