//! Request envelopes and their translation into [`MapConfig`]
//!
//! An envelope is the untrusted JSON description of a map:
//!
//! ```json
//! {
//!   "center": {"lat": 52.52, "lon": 13.40},
//!   "zoom": 12,
//!   "width": 640, "height": 480,
//!   "disable_attribution": false,
//!   "markers": [{"size": "mid", "color": "blue", "coord": {"lat": 52.52, "lon": 13.40}}],
//!   "paths": [{"size": 3.0, "color": "0xff000080", "positions": [{"lat": 52.5, "lon": 13.3}]}],
//!   "overlays": ["https://tiles.example.com/{0}/{1}/{2}.png"]
//! }
//! ```
//!
//! Translation checks the requested size first, then resolves markers,
//! overlays and paths in that order. The first failure is returned as is and
//! nothing else is produced.

pub mod marker;
pub mod overlay;
pub mod path;
pub mod point;

pub use marker::{translate_markers, PostMapMarker};
pub use overlay::{overlay_to_provider, translate_overlays};
pub use path::{translate_paths, PostMapPath};
pub use point::PostMapPoint;

use crate::{
    core::{config::MapLimits, map::MapConfig},
    MapError, Result,
};
use serde::{Deserialize, Deserializer, Serialize};

/// A map request as received from a client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostMapEnvelope {
    #[serde(deserialize_with = "null_as_default")]
    pub center: PostMapPoint,
    #[serde(deserialize_with = "null_as_default")]
    pub zoom: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub markers: Vec<PostMapMarker>,
    #[serde(deserialize_with = "null_as_default")]
    pub width: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub height: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub disable_attribution: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub overlays: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub paths: Vec<PostMapPath>,
}

/// Reads an explicit JSON `null` as the field's zero value, the same as a
/// missing key
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl PostMapEnvelope {
    /// Parses an envelope from its JSON wire form
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validates the request against `limits` and resolves it into a map
    /// configuration.
    pub fn to_map_config(&self, limits: &MapLimits) -> Result<MapConfig> {
        if !limits.allows(self.width, self.height) {
            log::warn!(
                "rejecting {}x{} map, limit is {}",
                self.width,
                self.height,
                limits
            );
            return Err(MapError::BoundsExceeded {
                max_width: limits.max_width,
                max_height: limits.max_height,
            });
        }

        let markers = translate_markers(&self.markers)?;
        let overlays = translate_overlays(&self.overlays)?;
        let paths = translate_paths(&self.paths)?;

        log::debug!(
            "translated {}x{} map at zoom {}: {} markers, {} overlays, {} paths",
            self.width,
            self.height,
            self.zoom,
            markers.len(),
            overlays.len(),
            paths.len()
        );

        Ok(MapConfig {
            center: self.center.to_lat_lng(),
            zoom: self.zoom,
            markers,
            paths,
            overlays,
            width: self.width,
            height: self.height,
            disable_attribution: self.disable_attribution,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;

    fn envelope(width: u32, height: u32) -> PostMapEnvelope {
        PostMapEnvelope {
            center: PostMapPoint::new(10.0, 20.0),
            zoom: 7,
            width,
            height,
            disable_attribution: true,
            ..PostMapEnvelope::default()
        }
    }

    #[test]
    fn test_echoes_scalar_fields() {
        let config = envelope(1024, 1).to_map_config(&MapLimits::default()).unwrap();

        assert_eq!(config.center, LatLng::new(10.0, 20.0));
        assert_eq!(config.zoom, 7);
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 1);
        assert!(config.disable_attribution);
        assert!(config.markers.is_empty());
        assert!(config.paths.is_empty());
        assert!(config.overlays.is_empty());
    }

    #[test]
    fn test_bounds_error_message() {
        let err = envelope(2000, 10)
            .to_map_config(&MapLimits::new(800, 600))
            .unwrap_err();

        assert!(matches!(
            err,
            MapError::BoundsExceeded {
                max_width: 800,
                max_height: 600
            }
        ));
        assert_eq!(err.to_string(), "map size exceeds allowed bounds of 800x600");
    }

    #[test]
    fn test_marker_errors_win_over_overlay_and_path_errors() {
        let mut request = envelope(10, 10);
        request.markers = vec![PostMapMarker::new(PostMapPoint::default()).with_color("nope")];
        request.overlays = vec!["missing".to_string()];
        request.paths = vec![PostMapPath::new(vec![]).with_color("nope")];

        let err = request.to_map_config(&MapLimits::default()).unwrap_err();
        assert!(matches!(err, MapError::InvalidMarkerSpec { .. }));

        request.markers.clear();
        let err = request.to_map_config(&MapLimits::default()).unwrap_err();
        assert!(matches!(err, MapError::MissingPlaceholder { .. }));

        request.overlays.clear();
        let err = request.to_map_config(&MapLimits::default()).unwrap_err();
        assert!(matches!(err, MapError::InvalidColor { .. }));
    }

    #[test]
    fn test_from_json_defaults_missing_fields() {
        let parsed = PostMapEnvelope::from_json(r#"{"zoom": 3}"#).unwrap();
        assert_eq!(parsed.zoom, 3);
        assert_eq!(parsed.width, 0);
        assert!(!parsed.disable_attribution);
        assert!(parsed.overlays.is_empty());
    }

    #[test]
    fn test_from_json_reads_null_as_empty() {
        let parsed = PostMapEnvelope::from_json(
            r#"{"center": null, "zoom": null, "width": null, "disable_attribution": null,
                "markers": null, "paths": null, "overlays": null}"#,
        )
        .unwrap();

        assert_eq!(parsed, PostMapEnvelope::default());
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(matches!(
            PostMapEnvelope::from_json("{\"width\": -5}"),
            Err(MapError::Serialization(_))
        ));
        assert!(matches!(
            PostMapEnvelope::from_json("not json"),
            Err(MapError::Serialization(_))
        ));
    }
}
