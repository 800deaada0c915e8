use crate::core::constants::{DEFAULT_MAX_ZOOM, MAX_SUPPORTED_ZOOM};
use crate::util::error::QuadHashError;
use serde::{Deserialize, Serialize};

/// Configuration for a [`TileHasher`](crate::TileHasher).
///
/// Missing fields fall back to their defaults, so `{}` is a valid config.
///
/// # Example
/// ```
/// use quadhash_rs::HasherConfig;
///
/// # fn main() -> Result<(), quadhash_rs::QuadHashError> {
/// let config = HasherConfig::from_json(r#"{ "max_zoom": 12 }"#)?;
/// assert_eq!(config.max_zoom, 12);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HasherConfig {
    /// Number of characters in a full-precision hash, one per zoom level
    pub max_zoom: u8,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }
}

impl HasherConfig {
    pub fn new(max_zoom: u8) -> Self {
        Self { max_zoom }
    }

    /// Parses and validates a JSON config.
    pub fn from_json(json: &str) -> Result<Self, QuadHashError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| QuadHashError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), QuadHashError> {
        if self.max_zoom == 0 || self.max_zoom > MAX_SUPPORTED_ZOOM {
            return Err(QuadHashError::InvalidZoomLevel(self.max_zoom));
        }
        Ok(())
    }
}
