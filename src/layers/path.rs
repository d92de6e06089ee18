use crate::core::{color::Color, constants::DEFAULT_PATH_WEIGHT, geo::LatLng};
use serde::{Deserialize, Serialize};

/// Polyline drawn through `positions` in order, with a uniform stroke
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub positions: Vec<LatLng>,
    pub color: Color,
    pub weight: f64,
}

impl Path {
    pub fn new(positions: Vec<LatLng>, color: Color, weight: f64) -> Self {
        Self {
            positions,
            color,
            weight,
        }
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::new(Vec::new(), Color::RED, DEFAULT_PATH_WEIGHT)
    }
}
