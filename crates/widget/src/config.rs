//! Widget configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `POCKET_CART_REDRAW` - `patch` (default) or `always`
//! - `POCKET_CART_CONTAINER_ID` - Cart container region id (default: cart)
//! - `POCKET_CART_TOTAL_ID` - Total price region id (default: total-price)

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const REDRAW_VAR: &str = "POCKET_CART_REDRAW";
const CONTAINER_ID_VAR: &str = "POCKET_CART_CONTAINER_ID";
const TOTAL_ID_VAR: &str = "POCKET_CART_TOTAL_ID";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// How the cart refreshes the display after a line-level change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RedrawPolicy {
    /// Increment, decrement and like patch the affected line in place;
    /// removals redraw the whole cart.
    #[default]
    LocalPatch,
    /// Every mutation redraws the whole cart.
    AlwaysRedraw,
}

impl fmt::Display for RedrawPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocalPatch => write!(f, "patch"),
            Self::AlwaysRedraw => write!(f, "always"),
        }
    }
}

impl FromStr for RedrawPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "patch" | "local_patch" => Ok(Self::LocalPatch),
            "always" | "always_redraw" => Ok(Self::AlwaysRedraw),
            other => Err(format!("invalid redraw policy: {other} (expected patch or always)")),
        }
    }
}

/// Stable identifiers of the two display regions the cart owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionIds {
    /// Region holding one element per cart line.
    pub container: String,
    /// Region holding the total price text.
    pub total: String,
}

impl Default for RegionIds {
    fn default() -> Self {
        Self {
            container: "cart".to_string(),
            total: "total-price".to_string(),
        }
    }
}

/// Widget configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Redraw policy for line-level changes
    pub redraw: RedrawPolicy,
    /// Display region identifiers
    pub regions: RegionIds,
}

impl WidgetConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let redraw = match lookup(REDRAW_VAR) {
            Some(value) => value
                .parse::<RedrawPolicy>()
                .map_err(|e| ConfigError::InvalidEnvVar(REDRAW_VAR.to_string(), e))?,
            None => RedrawPolicy::default(),
        };

        let defaults = RegionIds::default();
        let regions = RegionIds {
            container: region_id(&lookup, CONTAINER_ID_VAR, defaults.container)?,
            total: region_id(&lookup, TOTAL_ID_VAR, defaults.total)?,
        };

        if regions.container == regions.total {
            return Err(ConfigError::InvalidEnvVar(
                TOTAL_ID_VAR.to_string(),
                format!("must differ from {CONTAINER_ID_VAR} ({})", regions.container),
            ));
        }

        Ok(Self { redraw, regions })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Read a region id, falling back to `default` when unset.
fn region_id<F>(lookup: &F, key: &str, default: String) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(key) else {
        return Ok(default);
    };
    let value = value.trim().to_string();
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must be a non-empty identifier without whitespace".to_string(),
        ));
    }
    Ok(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = WidgetConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.regions.container, "cart");
        assert_eq!(config.regions.total, "total-price");
        assert_eq!(config.redraw, RedrawPolicy::LocalPatch);
    }

    #[test]
    fn test_redraw_policy_always() {
        let config =
            WidgetConfig::from_lookup(lookup_from(&[("POCKET_CART_REDRAW", "Always")])).unwrap();
        assert_eq!(config.redraw, RedrawPolicy::AlwaysRedraw);
    }

    #[test]
    fn test_redraw_policy_invalid() {
        let result = WidgetConfig::from_lookup(lookup_from(&[("POCKET_CART_REDRAW", "sometimes")]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(var, _)) if var == "POCKET_CART_REDRAW"));
    }

    #[test]
    fn test_custom_region_ids() {
        let config = WidgetConfig::from_lookup(lookup_from(&[
            ("POCKET_CART_CONTAINER_ID", "basket"),
            ("POCKET_CART_TOTAL_ID", "basket-total"),
        ]))
        .unwrap();
        assert_eq!(config.regions.container, "basket");
        assert_eq!(config.regions.total, "basket-total");
    }

    #[test]
    fn test_region_id_rejects_whitespace() {
        let result =
            WidgetConfig::from_lookup(lookup_from(&[("POCKET_CART_CONTAINER_ID", "my cart")]));
        assert!(result.is_err());

        let result = WidgetConfig::from_lookup(lookup_from(&[("POCKET_CART_TOTAL_ID", "  ")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_region_ids_must_differ() {
        let result = WidgetConfig::from_lookup(lookup_from(&[("POCKET_CART_TOTAL_ID", "cart")]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(var, _)) if var == "POCKET_CART_TOTAL_ID"));
    }

    #[test]
    fn test_redraw_policy_display_roundtrip() {
        for policy in [RedrawPolicy::LocalPatch, RedrawPolicy::AlwaysRedraw] {
            assert_eq!(policy.to_string().parse::<RedrawPolicy>().unwrap(), policy);
        }
    }
}
