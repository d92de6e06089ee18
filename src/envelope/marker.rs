use crate::{
    envelope::point::PostMapPoint,
    layers::marker::{parse_marker_locations, Marker},
    Result,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker as described in a request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMapMarker {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub coord: PostMapPoint,
}

impl PostMapMarker {
    pub fn new(coord: PostMapPoint) -> Self {
        Self {
            size: None,
            color: None,
            coord,
        }
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Marker spec string: `size:<s>|color:<c>|<lat>,<lon>`.
    /// Unset or empty size and color segments are left out.
    pub fn to_spec_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PostMapMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(size) = self.size.as_deref().filter(|s| !s.is_empty()) {
            write!(f, "size:{}|", size)?;
        }
        if let Some(color) = self.color.as_deref().filter(|c| !c.is_empty()) {
            write!(f, "color:{}|", color)?;
        }
        write!(f, "{}", self.coord)
    }
}

/// Resolves request markers through the marker spec grammar
pub fn translate_markers(markers: &[PostMapMarker]) -> Result<Vec<Marker>> {
    let specs: Vec<String> = markers.iter().map(PostMapMarker::to_spec_string).collect();
    parse_marker_locations(&specs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{color::Color, geo::LatLng},
        MapError,
    };

    #[test]
    fn test_spec_string_with_all_segments() {
        let marker = PostMapMarker::new(PostMapPoint::new(45.0, -122.0))
            .with_size("mid")
            .with_color("0xff0000");
        assert_eq!(
            marker.to_spec_string(),
            "size:mid|color:0xff0000|45.000000,-122.000000"
        );
    }

    #[test]
    fn test_spec_string_omits_unset_and_empty_segments() {
        let bare = PostMapMarker::new(PostMapPoint::new(1.0, 2.0));
        assert_eq!(bare.to_spec_string(), "1.000000,2.000000");

        let empty = bare.clone().with_size("").with_color("");
        assert_eq!(empty.to_spec_string(), "1.000000,2.000000");

        let color_only = bare.with_color("blue");
        assert_eq!(color_only.to_spec_string(), "color:blue|1.000000,2.000000");
    }

    #[test]
    fn test_translate_round_trip() {
        let markers = translate_markers(&[PostMapMarker::new(PostMapPoint::new(45.0, -122.0))
            .with_size("mid")
            .with_color("0xff0000")])
        .unwrap();

        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].position, LatLng::new(45.0, -122.0));
        assert_eq!(markers[0].color, Color::RED);
        assert_eq!(markers[0].size, 16.0);
    }

    #[test]
    fn test_translate_fails_without_partial_result() {
        let markers = [
            PostMapMarker::new(PostMapPoint::new(0.0, 0.0)),
            PostMapMarker::new(PostMapPoint::new(1.0, 1.0)).with_size("enormous"),
        ];

        match translate_markers(&markers) {
            Err(MapError::InvalidMarkerSpec { spec, .. }) => {
                assert_eq!(spec, "size:enormous|1.000000,1.000000")
            }
            other => panic!("expected InvalidMarkerSpec, got {other:?}"),
        }
    }

    #[test]
    fn test_translate_empty_list() {
        assert!(translate_markers(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_coord_is_required_on_the_wire() {
        let result = serde_json::from_str::<PostMapMarker>(r#"{"size": "mid"}"#);
        assert!(result.is_err());
    }
}
