//! Colors, written as CSS hex strings in configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// RGBA color with channels in `0.0..=1.0`.
///
/// Serializes as `#rrggbb`, or `#rrggbbaa` when translucent.
///
/// ```
/// use neumorph_core::Color;
///
/// let surface: Color = "#2c2f40".parse().unwrap();
/// assert_eq!(surface, Color::from_rgb8(0x2c, 0x2f, 0x40));
/// assert_eq!(surface.with_alpha(0.5).to_hex(), "#2c2f4080");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Opacity
    pub a: f32,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Opaque white.
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    fn clamped(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Opaque color from 8-bit channels.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8([r, g, b, u8::MAX])
    }

    fn from_rgba8([r, g, b, a]: [u8; 4]) -> Self {
        let unit = |v: u8| f32::from(v) / 255.0;
        Self::clamped(unit(r), unit(g), unit(b), unit(a))
    }

    fn to_rgba8(self) -> [u8; 4] {
        let byte = |v: f32| (v * 255.0).round() as u8;
        [byte(self.r), byte(self.g), byte(self.b), byte(self.a)]
    }

    /// CSS hex form. The alpha pair is present only when not fully opaque.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == u8::MAX {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Same color at opacity `a`.
    #[must_use]
    pub fn with_alpha(&self, a: f32) -> Self {
        Self::clamped(self.r, self.g, self.b, a)
    }

    /// Mix toward `other`; `t = 0` keeps `self`, `t = 1` gives `other`.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |from: f32, to: f32| from + (to - from) * t;
        Self::clamped(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parse `#rrggbb` or `#rrggbbaa`; the `#` is optional.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let digits = text.trim().trim_start_matches('#');
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::Digit(text.to_string()));
        }

        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        let channels = match digits.len() {
            6 => [byte(0), byte(2), byte(4), Ok(u8::MAX)],
            8 => [byte(0), byte(2), byte(4), byte(6)],
            len => return Err(ColorParseError::Length(len)),
        };

        let mut rgba = [0u8; 4];
        for (slot, channel) in rgba.iter_mut().zip(channels) {
            *slot = channel.map_err(|_| ColorParseError::Digit(text.to_string()))?;
        }
        Ok(Self::from_rgba8(rgba))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Why a color string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Wrong number of hex digits.
    #[error("expected 6 or 8 hex digits, found {0}")]
    Length(usize),
    /// A character that is not a hex digit.
    #[error("not a hex color: {0:?}")]
    Digit(String),
}
