//! Configuration for request translation
//!
//! The only tunable the translation layer enforces is the maximum output
//! size. It is passed explicitly to the assembler so different callers can
//! apply different limits side by side.

use crate::{
    core::constants::{DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH},
    MapError,
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Upper bounds for the requested output size, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapLimits {
    pub max_width: u32,
    pub max_height: u32,
}

impl MapLimits {
    pub fn new(max_width: u32, max_height: u32) -> Self {
        Self {
            max_width,
            max_height,
        }
    }

    /// Whether a `width` x `height` image fits inside these limits
    pub fn allows(&self, width: u32, height: u32) -> bool {
        width <= self.max_width && height <= self.max_height
    }
}

impl Default for MapLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WIDTH, DEFAULT_MAX_HEIGHT)
    }
}

impl fmt::Display for MapLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.max_width, self.max_height)
    }
}

/// Parses limits written as `WIDTHxHEIGHT`, e.g. `1024x768`
impl FromStr for MapLimits {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MapError::InvalidLimits(s.to_string());

        let (width, height) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        let max_width = width.trim().parse::<u32>().map_err(|_| invalid())?;
        let max_height = height.trim().parse::<u32>().map_err(|_| invalid())?;

        Ok(Self::new(max_width, max_height))
    }
}
