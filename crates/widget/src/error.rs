//! Unified error handling for the widget.
//!
//! Cart state updates never fail. Errors come from a surface that cannot
//! draw, or from a user event that does not parse or names an unknown
//! product. Catalog and configuration loading keep their own error types.

use pocket_cart_core::ProductId;
use thiserror::Error;

use crate::event::EventParseError;
use crate::render::RenderError;

/// Widget-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A display surface failed to draw.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// A user event could not be parsed.
    #[error("Invalid event: {0}")]
    Event(#[from] EventParseError),

    /// An add event named a product that is not in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),
}

/// Result type alias for [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
