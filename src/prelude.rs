//! Prelude module for common postmap types and traits
//!
//! Re-exports what a request handler usually needs, for easy importing with
//! `use postmap::prelude::*;`

pub use crate::core::{
    color::Color,
    config::MapLimits,
    geo::{LatLng, TileCoord},
    map::MapConfig,
};

pub use crate::envelope::{PostMapEnvelope, PostMapMarker, PostMapPath, PostMapPoint};

pub use crate::layers::{marker::Marker, path::Path};

pub use crate::rendering::{MapRenderer, RenderPlan};

pub use crate::tiles::source::{TileProvider, TileSource};

pub use crate::{Error as MapError, Result};
