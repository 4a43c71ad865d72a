//! RGBA colors and hex parsing.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// RGBA color with values in the range [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component [0.0, 1.0]
    pub r: f32,
    /// Green component [0.0, 1.0]
    pub g: f32,
    /// Blue component [0.0, 1.0]
    pub b: f32,
    /// Alpha component [0.0, 1.0]
    pub a: f32,
}

impl Color {
    /// Black color
    pub const BLACK: Self = Self::opaque(0.0, 0.0, 0.0);
    /// White color
    pub const WHITE: Self = Self::opaque(1.0, 1.0, 1.0);
    /// Transparent color
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };
    /// Pure green
    pub const GREEN: Self = Self::opaque(0.0, 1.0, 0.0);
    /// CSS orange (#ffa500)
    pub const ORANGE: Self = Self::opaque(1.0, 0.647_058_83, 0.0);

    const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a new color, clamping values to [0.0, 1.0].
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque color from RGB values.
    #[must_use]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create an opaque color from 8-bit channels.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// Parse a hex color string (`#rrggbb`, `rrggbb`, `#rrggbbaa` or `#rgb`).
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.trim_start_matches('#');
        if !digits.is_ascii() {
            return Err(ColorParseError::InvalidHex);
        }
        let channel = |range: std::ops::Range<usize>| -> Result<f32, ColorParseError> {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| f32::from(v) / 255.0)
                .map_err(|_| ColorParseError::InvalidHex)
        };

        match digits.len() {
            3 => {
                let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
                Self::from_hex(&expanded)
            }
            6 => Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::new(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(ColorParseError::InvalidLength),
        }
    }

    /// Convert to a `#rrggbb` string, or `#rrggbbaa` when not fully opaque.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let byte = |c: f32| (c * 255.0).round() as u8;
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                byte(self.r),
                byte(self.g),
                byte(self.b),
                byte(self.a)
            )
        }
    }

    /// Same color with a different alpha.
    #[must_use]
    pub fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Invalid hex characters
    #[error("invalid hex characters")]
    InvalidHex,
    /// Invalid string length
    #[error("invalid hex string length (expected 3, 6 or 8)")]
    InvalidLength,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_color_new_clamps_values() {
        let c = Color::new(1.5, -0.5, 0.5, 2.0);
        assert_eq!((c.r, c.g, c.b, c.a), (1.0, 0.0, 0.5, 1.0));
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#3f3f3f").unwrap();
        assert!((c.r - 63.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);

        let c = Color::from_hex("b3b3b3").unwrap();
        assert!((c.g - 179.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_color_from_rgb8_matches_hex() {
        assert_eq!(
            Color::from_rgb8(0x34, 0x34, 0x34),
            Color::from_hex("#343434").unwrap()
        );
    }

    #[test]
    fn test_color_from_short_hex() {
        assert_eq!(Color::from_hex("#fff").unwrap(), Color::WHITE);
        assert_eq!(Color::from_hex("000").unwrap(), Color::BLACK);
    }

    #[test]
    fn test_color_from_hex_with_alpha() {
        let c = Color::from_hex("#ff000080").unwrap();
        assert_eq!(c.r, 1.0);
        assert!((c.a - 0.502).abs() < 0.01);
    }

    #[test]
    fn test_color_from_hex_invalid() {
        assert_eq!(Color::from_hex("#gg0000"), Err(ColorParseError::InvalidHex));
        assert_eq!(Color::from_hex("#ff"), Err(ColorParseError::InvalidLength));
        assert_eq!(Color::from_hex("#ééé"), Err(ColorParseError::InvalidHex));
    }

    #[test]
    fn test_color_from_str() {
        let c: Color = "#343434".parse().unwrap();
        assert_eq!(c.to_hex(), "#343434");
    }

    #[test]
    fn test_color_to_hex_with_alpha() {
        assert_eq!(Color::GREEN.with_alpha(0.5).to_hex(), "#00ff0080");
        assert_eq!(Color::ORANGE.to_hex(), "#ffa500");
    }

    #[test]
    fn test_color_parse_error_display() {
        assert_eq!(
            ColorParseError::InvalidHex.to_string(),
            "invalid hex characters"
        );
    }

    proptest! {
        #[test]
        fn prop_hex_roundtrip(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let hex = format!("#{r:02x}{g:02x}{b:02x}");
            let c = Color::from_hex(&hex).unwrap();
            prop_assert_eq!(c.to_hex(), hex);
        }

        #[test]
        fn prop_with_alpha_keeps_channels(r in 0.0f32..1.0, a in 0.0f32..1.0) {
            let c = Color::rgb(r, 0.5, 0.25).with_alpha(a);
            prop_assert_eq!(c.r, r);
            prop_assert_eq!(c.a, a);
        }
    }
}
