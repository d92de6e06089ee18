use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordinate as it appears on the wire: `{"lat": .., "lon": ..}` in degrees
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostMapPoint {
    pub lat: f64,
    pub lon: f64,
}

impl PostMapPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Engine coordinate for this point. No range checks are applied.
    pub fn to_lat_lng(&self) -> LatLng {
        LatLng::new(self.lat, self.lon)
    }

    /// `lat,lon` with six fractional digits, as used in marker specs
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }
}

impl From<PostMapPoint> for LatLng {
    fn from(point: PostMapPoint) -> Self {
        point.to_lat_lng()
    }
}

impl fmt::Display for PostMapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lon)
    }
}
