//! Map markers and the marker spec grammar
//!
//! A marker spec is a `|`-separated list of segments read left to right.
//! Style segments (`color:`, `size:`, `label:`, `labelcolor:`) update the
//! current style; every other segment must be a `lat,lon` pair and places
//! one marker with the style accumulated so far:
//!
//! ```text
//! size:mid|color:0xff0000|45.000000,-122.000000
//! color:blue|label:A|1.5,2.5|3.5,4.5
//! ```

use crate::{
    core::{
        color::Color,
        constants::{DEFAULT_MARKER_SIZE, MARKER_SIZE_MID, MARKER_SIZE_SMALL, MARKER_SIZE_TINY},
        geo::LatLng,
    },
    MapError, Result,
};
use serde::{Deserialize, Serialize};

/// A single marker placed on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub position: LatLng,
    pub color: Color,
    pub size: f64,
    pub label: Option<String>,
    pub label_color: Color,
}

impl Marker {
    /// Red, mid-sized, unlabeled marker at `position`
    pub fn new(position: LatLng) -> Self {
        Self::with_style(position, &MarkerStyle::default())
    }

    fn with_style(position: LatLng, style: &MarkerStyle) -> Self {
        Self {
            position,
            color: style.color,
            size: style.size,
            label: style.label.clone(),
            label_color: style.label_color.unwrap_or_else(|| contrast_color(style.color)),
        }
    }
}

/// Style accumulated while walking a marker spec
#[derive(Debug, Clone)]
struct MarkerStyle {
    color: Color,
    size: f64,
    label: Option<String>,
    label_color: Option<Color>,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            color: Color::RED,
            size: DEFAULT_MARKER_SIZE,
            label: None,
            label_color: None,
        }
    }
}

/// Label color readable on top of `color`
fn contrast_color(color: Color) -> Color {
    if color.luminance() >= 0.5 {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

/// Parses one marker spec into the markers it places.
///
/// Fails if any segment is malformed or the spec places no marker at all.
pub fn parse_marker_spec(spec: &str) -> Result<Vec<Marker>> {
    let invalid = |reason: String| MapError::InvalidMarkerSpec {
        spec: spec.to_string(),
        reason,
    };

    let mut style = MarkerStyle::default();
    let mut markers = Vec::new();

    for segment in spec.split('|') {
        if let Some(value) = segment.strip_prefix("color:") {
            style.color = Color::parse(value).map_err(|e| invalid(e.to_string()))?;
        } else if let Some(value) = segment.strip_prefix("size:") {
            style.size = parse_marker_size(value).map_err(invalid)?;
        } else if let Some(value) = segment.strip_prefix("labelcolor:") {
            style.label_color = Some(Color::parse(value).map_err(|e| invalid(e.to_string()))?);
        } else if let Some(value) = segment.strip_prefix("label:") {
            style.label = Some(value.to_string());
        } else {
            let position = parse_lat_lng(segment).map_err(invalid)?;
            markers.push(Marker::with_style(position, &style));
        }
    }

    if markers.is_empty() {
        return Err(invalid("no marker location given".to_string()));
    }

    Ok(markers)
}

/// Parses every spec in order and concatenates the resulting markers.
///
/// The first invalid spec aborts the whole list.
pub fn parse_marker_locations<S: AsRef<str>>(specs: &[S]) -> Result<Vec<Marker>> {
    let mut markers = Vec::with_capacity(specs.len());
    for spec in specs {
        markers.extend(parse_marker_spec(spec.as_ref())?);
    }
    Ok(markers)
}

fn parse_marker_size(value: &str) -> std::result::Result<f64, String> {
    match value {
        "tiny" => Ok(MARKER_SIZE_TINY),
        "small" => Ok(MARKER_SIZE_SMALL),
        "mid" => Ok(MARKER_SIZE_MID),
        other => match other.parse::<f64>() {
            Ok(size) if size.is_finite() && size > 0.0 => Ok(size),
            _ => Err(format!("cannot parse size string: {}", value)),
        },
    }
}

fn parse_lat_lng(segment: &str) -> std::result::Result<LatLng, String> {
    let bad = || format!("cannot parse location: {:?}", segment);

    let (lat, lng) = segment.split_once(',').ok_or_else(bad)?;
    let lat = lat.trim().parse::<f64>().map_err(|_| bad())?;
    let lng = lng.trim().parse::<f64>().map_err(|_| bad())?;

    Ok(LatLng::new(lat, lng))
}
