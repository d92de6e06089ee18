pub mod source;

// Re-exports for convenience
pub use source::{pattern_digest, TileProvider, TileSource};
