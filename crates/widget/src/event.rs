//! User actions on the cart.
//!
//! Every control a surface draws is tagged with an action name and a
//! product id (`data-action="increment" data-product-id="1"` in HTML). The
//! same pair, written `"increment 1"`, is what the interactive shell reads.

use std::fmt;
use std::str::FromStr;

use pocket_cart_core::ProductId;
use thiserror::Error;

/// Errors that can occur when parsing a [`CartEvent`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventParseError {
    /// The input was blank.
    #[error("event cannot be empty")]
    Empty,
    /// The action name is not recognised.
    #[error("unknown action: {0}")]
    UnknownAction(String),
    /// The action was given without a product id.
    #[error("action {0} needs a product id")]
    MissingProductId(String),
    /// The product id is not an integer.
    #[error("invalid product id: {0}")]
    InvalidProductId(String),
    /// Extra tokens followed the product id.
    #[error("unexpected input after product id: {0}")]
    TrailingInput(String),
}

/// A user action addressed at one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartEvent {
    /// Add a catalog product, or bump its quantity if already in the cart.
    Add(ProductId),
    /// Remove the product's entry if present.
    Remove(ProductId),
    /// The `+` control.
    Increment(ProductId),
    /// The `-` control.
    Decrement(ProductId),
    /// The `Delete` control.
    Delete(ProductId),
    /// The `Like` control.
    ToggleLike(ProductId),
}

impl CartEvent {
    /// The product this event targets.
    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        match *self {
            Self::Add(id)
            | Self::Remove(id)
            | Self::Increment(id)
            | Self::Decrement(id)
            | Self::Delete(id)
            | Self::ToggleLike(id) => id,
        }
    }

    /// Canonical action name, as used in `data-action` attributes.
    #[must_use]
    pub const fn action(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Remove(_) => "remove",
            Self::Increment(_) => "increment",
            Self::Decrement(_) => "decrement",
            Self::Delete(_) => "delete",
            Self::ToggleLike(_) => "toggle-like",
        }
    }

    /// Build an event from an action name and a product id string.
    ///
    /// Accepts the canonical names plus the shorthands `+`, `-`, `inc`,
    /// `dec`, `del`, `rm` and `like`.
    ///
    /// # Errors
    ///
    /// Returns `EventParseError` for unknown actions or non-integer ids.
    pub fn from_action(action: &str, product_id: &str) -> Result<Self, EventParseError> {
        let constructor: fn(ProductId) -> Self = match action.to_ascii_lowercase().as_str() {
            "add" => Self::Add,
            "remove" | "rm" => Self::Remove,
            "increment" | "inc" | "+" => Self::Increment,
            "decrement" | "dec" | "-" => Self::Decrement,
            "delete" | "del" => Self::Delete,
            "toggle-like" | "like" => Self::ToggleLike,
            _ => return Err(EventParseError::UnknownAction(action.to_string())),
        };
        let id = product_id
            .parse::<ProductId>()
            .map_err(|_| EventParseError::InvalidProductId(product_id.to_string()))?;
        Ok(constructor(id))
    }
}

impl fmt::Display for CartEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.action(), self.product_id())
    }
}

impl FromStr for CartEvent {
    type Err = EventParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let action = tokens.next().ok_or(EventParseError::Empty)?;
        let product_id = tokens
            .next()
            .ok_or_else(|| EventParseError::MissingProductId(action.to_string()))?;
        let rest: Vec<&str> = tokens.collect();
        if !rest.is_empty() {
            return Err(EventParseError::TrailingInput(rest.join(" ")));
        }
        Self::from_action(action, product_id)
    }
}
