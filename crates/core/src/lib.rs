//! Pocket Cart Core - Shared types library.
//!
//! This crate provides the domain types used across all Pocket Cart components:
//! - `widget` - The cart, its render capability and display surfaces
//! - `cli` - Command-line driver for the widget
//!
//! # Architecture
//!
//! The core crate contains only types - no rendering, no terminal access,
//! no file I/O. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices, plus products
//! - [`catalog`] - The fixed set of purchasable products

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod types;

pub use catalog::{Catalog, CatalogError};
pub use types::*;
