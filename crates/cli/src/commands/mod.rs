//! CLI command implementations.

pub mod catalog;
pub mod demo;
pub mod html;
pub mod shell;

use std::path::{Path, PathBuf};

use pocket_cart_core::{Catalog, CatalogError};
use pocket_cart_widget::{Cart, Render};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Invalid(#[from] CatalogError),
}

/// Load the catalog from `path`, or the built-in sample when `None`.
///
/// # Errors
///
/// Returns `CatalogLoadError` if the file cannot be read or parsed.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogLoadError> {
    let Some(path) = path else {
        return Ok(Catalog::sample());
    };
    let json = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = Catalog::from_json(&json)?;
    info!(path = %path.display(), products = catalog.len(), "Loaded catalog");
    Ok(catalog)
}

/// Add every catalog product to the cart once, in catalog order.
///
/// # Errors
///
/// Returns an error if the cart's surface fails to draw.
pub fn seed<R: Render>(cart: &mut Cart<R>, catalog: &Catalog) -> pocket_cart_widget::Result<()> {
    for product in catalog {
        cart.add_item(product)?;
    }
    Ok(())
}
