//! The rendering capability a [`MapConfig`](crate::core::map::MapConfig) is applied to
//!
//! Rasterization, tile fetching and image encoding happen behind
//! [`MapRenderer`]; this crate only prepares its arguments.

pub mod plan;

pub use plan::{RenderPlan, RenderStep};

use crate::{
    core::geo::LatLng,
    layers::{marker::Marker, path::Path},
    tiles::source::TileProvider,
};

/// Map rendering engine driven by a validated configuration
pub trait MapRenderer {
    /// Whatever `render` produces, typically an encoded image
    type Output;

    fn set_center(&mut self, center: LatLng);

    fn set_zoom(&mut self, zoom: i32);

    fn add_marker(&mut self, marker: Marker);

    fn add_path(&mut self, path: Path);

    fn add_tile_provider(&mut self, provider: TileProvider);

    /// Engines without an attribution overlay can ignore this
    fn set_attribution_visible(&mut self, _visible: bool) {}

    fn render(&mut self, width: u32, height: u32) -> Self::Output;
}
