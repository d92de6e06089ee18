pub mod marker;
pub mod path;

pub use marker::{parse_marker_locations, parse_marker_spec, Marker};
pub use path::Path;
