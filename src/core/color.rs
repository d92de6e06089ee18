//! RGBA colors and the color grammar accepted in marker specs and path styles
//!
//! A color string is either one of a small set of names (`red`, `blue`, ...)
//! or a hex literal written as `0xRRGGBB`, `#RRGGBB`, `0xRRGGBBAA` or
//! `#RRGGBBAA`. Input is trimmed and matched case-insensitively.

use fxhash::FxHashMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

static NAMED_COLORS: Lazy<FxHashMap<&'static str, Color>> = Lazy::new(|| {
    let mut colors = FxHashMap::default();
    colors.insert("black", Color::rgb(0x00, 0x00, 0x00));
    colors.insert("blue", Color::rgb(0x00, 0x00, 0xff));
    colors.insert("brown", Color::rgb(0x96, 0x4b, 0x00));
    colors.insert("green", Color::rgb(0x00, 0xff, 0x00));
    colors.insert("orange", Color::rgb(0xff, 0x7f, 0x00));
    colors.insert("purple", Color::rgb(0x7f, 0x00, 0x7f));
    colors.insert("red", Color::RED);
    colors.insert("yellow", Color::rgb(0xff, 0xff, 0x00));
    colors.insert("white", Color::rgb(0xff, 0xff, 0xff));
    colors.insert("transparent", Color::new(0x00, 0x00, 0x00, 0x00));
    colors
});

/// Error returned when a color string matches neither a name nor a hex literal
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse color string: {0}")]
pub struct ColorParseError(pub String);

/// Non-premultiplied RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(0xff, 0x00, 0x00);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parses a named or hex color
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let normalized = input.trim().to_ascii_lowercase();

        if let Some(color) = NAMED_COLORS.get(normalized.as_str()) {
            return Ok(*color);
        }

        let digits = normalized
            .strip_prefix("0x")
            .or_else(|| normalized.strip_prefix('#'))
            .ok_or_else(|| ColorParseError(input.to_string()))?;

        parse_hex_digits(digits).ok_or_else(|| ColorParseError(input.to_string()))
    }

    /// Relative luminance in `0.0..=1.0`, ignoring alpha
    pub fn luminance(&self) -> f64 {
        (0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64) / 255.0
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

fn parse_hex_digits(digits: &str) -> Option<Color> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();

    match digits.len() {
        6 => Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
        8 => Some(Color::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors() {
        assert_eq!(Color::parse("red").unwrap(), Color::new(255, 0, 0, 255));
        assert_eq!(Color::parse("Brown").unwrap(), Color::rgb(0x96, 0x4b, 0x00));
        assert_eq!(Color::parse("  blue ").unwrap(), Color::rgb(0, 0, 255));
        assert_eq!(Color::parse("transparent").unwrap().a, 0);
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(Color::parse("0xff0000").unwrap(), Color::RED);
        assert_eq!(Color::parse("#00FF00").unwrap(), Color::rgb(0, 255, 0));
        assert_eq!(
            Color::parse("0x11223344").unwrap(),
            Color::new(0x11, 0x22, 0x33, 0x44)
        );
    }

    #[test]
    fn test_rejects_unknown_colors() {
        for input in ["not-a-color", "", "0x", "#12345", "0xgg0000", "ff0000", "#1234567"] {
            let err = Color::parse(input).unwrap_err();
            assert_eq!(err, ColorParseError(input.to_string()));
        }
    }

    #[test]
    fn test_luminance() {
        assert!(Color::WHITE.luminance() > 0.99);
        assert!(Color::BLACK.luminance() < 0.01);
        assert!(Color::RED.luminance() < 0.5);
        assert!(Color::parse("yellow").unwrap().luminance() >= 0.5);
    }
}
