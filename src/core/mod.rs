pub mod color;
pub mod config;
pub mod constants;
pub mod geo;
pub mod map;

pub use color::{Color, ColorParseError};
pub use config::MapLimits;
pub use geo::{LatLng, TileCoord};
pub use map::MapConfig;
