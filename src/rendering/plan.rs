use crate::{
    core::geo::LatLng,
    layers::{marker::Marker, path::Path},
    rendering::MapRenderer,
    tiles::source::TileProvider,
};
use serde::Serialize;

/// One call made against a [`MapRenderer`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", content = "arg", rename_all = "snake_case")]
pub enum RenderStep {
    SetCenter(LatLng),
    SetZoom(i32),
    AddMarker(Marker),
    AddPath(Path),
    AddTileProvider(TileProvider),
    SetAttributionVisible(bool),
    Render { width: u32, height: u32 },
}

/// Renderer that draws nothing and records every call it receives.
///
/// Useful for inspecting what a configuration would ask of a real engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderPlan {
    steps: Vec<RenderStep>,
}

impl RenderPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[RenderStep] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<RenderStep> {
        self.steps
    }
}

impl MapRenderer for RenderPlan {
    /// Number of steps recorded before the render call
    type Output = usize;

    fn set_center(&mut self, center: LatLng) {
        self.steps.push(RenderStep::SetCenter(center));
    }

    fn set_zoom(&mut self, zoom: i32) {
        self.steps.push(RenderStep::SetZoom(zoom));
    }

    fn add_marker(&mut self, marker: Marker) {
        self.steps.push(RenderStep::AddMarker(marker));
    }

    fn add_path(&mut self, path: Path) {
        self.steps.push(RenderStep::AddPath(path));
    }

    fn add_tile_provider(&mut self, provider: TileProvider) {
        self.steps.push(RenderStep::AddTileProvider(provider));
    }

    fn set_attribution_visible(&mut self, visible: bool) {
        self.steps.push(RenderStep::SetAttributionVisible(visible));
    }

    fn render(&mut self, width: u32, height: u32) -> usize {
        let recorded = self.steps.len();
        self.steps.push(RenderStep::Render { width, height });
        recorded
    }
}
