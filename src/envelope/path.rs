use crate::{
    core::{color::Color, constants::DEFAULT_PATH_WEIGHT, geo::LatLng},
    envelope::point::PostMapPoint,
    layers::path::Path,
    MapError, Result,
};
use serde::{Deserialize, Serialize};

/// Path as described in a request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostMapPath {
    /// Stroke weight; the wire calls it `size`
    #[serde(rename = "size", skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(deserialize_with = "crate::envelope::null_as_default")]
    pub positions: Vec<PostMapPoint>,
}

impl PostMapPath {
    pub fn new(positions: Vec<PostMapPoint>) -> Self {
        Self {
            positions,
            ..Self::default()
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Resolves this description into a drawable path
    pub fn to_path(&self) -> Result<Path> {
        let positions: Vec<LatLng> = self.positions.iter().map(PostMapPoint::to_lat_lng).collect();

        let color = match self.color.as_deref().filter(|c| !c.is_empty()) {
            Some(name) => Color::parse(name).map_err(|source| MapError::InvalidColor {
                color: name.to_string(),
                source,
            })?,
            None => Color::RED,
        };

        let weight = match self.weight {
            Some(weight) if weight != 0.0 => weight,
            _ => DEFAULT_PATH_WEIGHT,
        };

        Ok(Path::new(positions, color, weight))
    }
}

/// Resolves every request path in order; the first bad color aborts
pub fn translate_paths(paths: &[PostMapPath]) -> Result<Vec<Path>> {
    paths.iter().map(PostMapPath::to_path).collect()
}
