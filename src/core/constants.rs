//! Engine-wide constants for request translation.
//! Keeping them in a single place makes it easier to tweak defaults.

/// Edge length in pixels of every tile served by an overlay provider.
/// The engine only supports a single fixed tile size.
pub const TILE_SIZE: u32 = 256;

/// Default maximum output width in pixels.
pub const DEFAULT_MAX_WIDTH: u32 = 1024;

/// Default maximum output height in pixels.
pub const DEFAULT_MAX_HEIGHT: u32 = 1024;

/// Stroke weight of a path that does not specify one.
pub const DEFAULT_PATH_WEIGHT: f64 = 5.0;

/// Named marker sizes accepted by the marker spec grammar.
pub const MARKER_SIZE_TINY: f64 = 8.0;
pub const MARKER_SIZE_SMALL: f64 = 12.0;
pub const MARKER_SIZE_MID: f64 = 16.0;

/// Marker size used when a spec does not name one.
pub const DEFAULT_MARKER_SIZE: f64 = MARKER_SIZE_MID;
