//! # postmap
//!
//! Turns untrusted static-map requests into validated map configurations.
//!
//! A request envelope names a center, zoom, output size, markers, paths and
//! tile overlays. This crate checks the size against configured limits,
//! resolves every marker through the marker spec grammar, resolves path colors,
//! validates overlay URL patterns, and hands back a [`MapConfig`] that can be
//! applied to any [`MapRenderer`].
//!
//! ```
//! use postmap::{MapLimits, PostMapEnvelope};
//!
//! let envelope = PostMapEnvelope::from_json(r#"{
//!     "center": {"lat": 45.0, "lon": -122.0},
//!     "zoom": 10,
//!     "width": 400,
//!     "height": 300,
//!     "markers": [{"size": "mid", "color": "0xff0000", "coord": {"lat": 45.0, "lon": -122.0}}],
//!     "overlays": ["https://tiles.example.com/{0}/{1}/{2}.png"]
//! }"#)?;
//!
//! let config = envelope.to_map_config(&MapLimits::default())?;
//! assert_eq!(config.markers.len(), 1);
//! assert_eq!(config.overlays[0].url_pattern, "https://tiles.example.com/{z}/{x}/{y}.png");
//! # Ok::<(), postmap::MapError>(())
//! ```

pub mod core;
pub mod envelope;
pub mod layers;
pub mod prelude;
pub mod rendering;
pub mod tiles;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    color::{Color, ColorParseError},
    config::MapLimits,
    geo::{LatLng, TileCoord},
    map::MapConfig,
};

pub use envelope::{PostMapEnvelope, PostMapMarker, PostMapPath, PostMapPoint};

pub use layers::{marker::Marker, path::Path};

pub use rendering::{MapRenderer, RenderPlan, RenderStep};

pub use tiles::{TileProvider, TileSource};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Everything that can go wrong while translating a request
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("map size exceeds allowed bounds of {max_width}x{max_height}")]
    BoundsExceeded { max_width: u32, max_height: u32 },

    #[error("invalid marker spec {spec:?}: {reason}")]
    InvalidMarkerSpec { spec: String, reason: String },

    #[error("bad color name {color:?}: {source}")]
    InvalidColor {
        color: String,
        #[source]
        source: ColorParseError,
    },

    #[error("placeholder {placeholder:?} not found in pattern {pattern:?}")]
    MissingPlaceholder {
        placeholder: String,
        pattern: String,
    },

    #[error("invalid map size limits {0:?}, expected WIDTHxHEIGHT")]
    InvalidLimits(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = MapError;
