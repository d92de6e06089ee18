use crate::{
    core::geo::LatLng,
    layers::{marker::Marker, path::Path},
    rendering::MapRenderer,
    tiles::source::TileProvider,
};
use serde::{Deserialize, Serialize};

/// Validated map configuration, ready to be handed to a renderer.
///
/// Produced by [`PostMapEnvelope::to_map_config`](crate::envelope::PostMapEnvelope::to_map_config)
/// once every marker, path and overlay has been resolved. Values here have
/// already passed the size limits and grammar checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub center: LatLng,
    pub zoom: i32,
    pub markers: Vec<Marker>,
    pub paths: Vec<Path>,
    pub overlays: Vec<TileProvider>,
    pub width: u32,
    pub height: u32,
    pub disable_attribution: bool,
}

impl MapConfig {
    /// Feeds the configuration into `renderer`.
    ///
    /// Rendering itself is left to the caller, who decides when to invoke
    /// [`MapRenderer::render`] with [`MapConfig::width`] and [`MapConfig::height`].
    pub fn apply_to<R: MapRenderer + ?Sized>(&self, renderer: &mut R) {
        renderer.set_center(self.center);
        renderer.set_zoom(self.zoom);

        for marker in &self.markers {
            renderer.add_marker(marker.clone());
        }
        for path in &self.paths {
            renderer.add_path(path.clone());
        }
        for provider in &self.overlays {
            renderer.add_tile_provider(provider.clone());
        }

        if self.disable_attribution {
            renderer.set_attribution_visible(false);
        }

        log::debug!(
            "applied map config: {} markers, {} paths, {} overlays",
            self.markers.len(),
            self.paths.len(),
            self.overlays.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::color::Color,
        rendering::{RenderPlan, RenderStep},
    };

    fn sample_config(disable_attribution: bool) -> MapConfig {
        MapConfig {
            center: LatLng::new(52.5, 13.4),
            zoom: 11,
            markers: vec![Marker::new(LatLng::new(52.5, 13.4))],
            paths: vec![Path::new(vec![LatLng::new(1.0, 2.0)], Color::RED, 5.0)],
            overlays: vec![TileProvider::new("https://t.example/{z}/{x}/{y}.png")],
            width: 400,
            height: 300,
            disable_attribution,
        }
    }

    #[test]
    fn test_apply_to_records_calls_in_order() {
        let config = sample_config(true);
        let mut plan = RenderPlan::new();
        config.apply_to(&mut plan);

        let steps = plan.steps();
        assert_eq!(steps.len(), 6);
        assert_eq!(steps[0], RenderStep::SetCenter(config.center));
        assert_eq!(steps[1], RenderStep::SetZoom(11));
        assert_eq!(steps[2], RenderStep::AddMarker(config.markers[0].clone()));
        assert_eq!(steps[3], RenderStep::AddPath(config.paths[0].clone()));
        assert_eq!(
            steps[4],
            RenderStep::AddTileProvider(config.overlays[0].clone())
        );
        assert_eq!(steps[5], RenderStep::SetAttributionVisible(false));
    }

    #[test]
    fn test_attribution_untouched_when_enabled() {
        let mut plan = RenderPlan::new();
        sample_config(false).apply_to(&mut plan);

        assert!(!plan
            .steps()
            .iter()
            .any(|step| matches!(step, RenderStep::SetAttributionVisible(_))));
    }
}
