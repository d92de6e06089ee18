use crate::core::{constants::TILE_SIZE, geo::TileCoord};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Placeholders understood by the engine in tile URL patterns
pub const ZOOM_PLACEHOLDER: &str = "{z}";
pub const X_PLACEHOLDER: &str = "{x}";
pub const Y_PLACEHOLDER: &str = "{y}";

/// Anything that can produce tile URLs for a given coordinate.
pub trait TileSource: Send + Sync {
    /// Build a URL for the requested `coord`.
    fn url(&self, coord: TileCoord) -> String;
}

/// Named tile source addressed by a `{z}`/`{x}`/`{y}` URL pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileProvider {
    /// Lowercase hex SHA-256 of `url_pattern`
    pub name: String,
    pub tile_size: u32,
    pub url_pattern: String,
}

impl TileProvider {
    /// Provider for an engine-native pattern, named after the pattern's digest
    /// so identical patterns always share a name.
    pub fn new(url_pattern: impl Into<String>) -> Self {
        let url_pattern = url_pattern.into();
        Self {
            name: pattern_digest(&url_pattern),
            tile_size: TILE_SIZE,
            url_pattern,
        }
    }
}

impl TileSource for TileProvider {
    fn url(&self, coord: TileCoord) -> String {
        self.url_pattern
            .replace(ZOOM_PLACEHOLDER, &coord.z.to_string())
            .replace(X_PLACEHOLDER, &coord.x.to_string())
            .replace(Y_PLACEHOLDER, &coord.y.to_string())
    }
}

/// Lowercase hex SHA-256 digest of `pattern`
pub fn pattern_digest(pattern: &str) -> String {
    format!("{:x}", Sha256::digest(pattern.as_bytes()))
}
