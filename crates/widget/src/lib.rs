//! Pocket Cart widget library.
//!
//! This crate provides the shopping cart and everything it draws into:
//!
//! - [`cart`] - Cart entries and the operations that mutate them
//! - [`render`] - The `Render` capability a cart draws through
//! - [`view`] - Display-ready snapshots of the cart
//! - [`surface`] - HTML, plain-text and recording implementations of `Render`
//! - [`event`] - User actions on cart lines, parseable from text
//! - [`config`] - Environment-driven widget configuration
//!
//! The cart never touches a display directly, so its update logic can be
//! driven and inspected with any surface, including a fake one in tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod error;
pub mod event;
pub mod render;
pub mod surface;
pub mod view;

pub use cart::{Cart, CartEntry};
pub use config::{ConfigError, RedrawPolicy, RegionIds, WidgetConfig};
pub use error::{Error, Result};
pub use event::{CartEvent, EventParseError};
pub use render::{Render, RenderError};
pub use surface::{HtmlSurface, RecordingSurface, SurfaceCall, TextSurface};
pub use view::{CartItemView, CartView};
