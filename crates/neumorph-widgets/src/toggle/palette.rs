//! Neumorphic colors.
//!
//! Neumorphism draws a control in the same color as the surface behind it and
//! separates it with a pair of soft shadows: a darker one offset toward the
//! bottom right and a lighter highlight toward the top left.

use neumorph_core::Color;
use serde::{Deserialize, Serialize};

/// Colors for one appearance of the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NeumorphicPalette {
    /// Track and surface color
    pub surface: Color,
    /// Bottom-right shadow
    pub shadow: Color,
    /// Top-left highlight
    pub highlight: Color,
    /// Handle fill
    pub handle: Color,
    /// Keyboard focus ring
    pub focus_ring: Color,
}

impl NeumorphicPalette {
    /// Derive shadow, highlight and handle shades from a surface color.
    #[must_use]
    pub fn from_surface(surface: Color) -> Self {
        Self {
            surface,
            shadow: surface.lerp(&Color::BLACK, 0.18),
            highlight: surface.lerp(&Color::WHITE, 0.7),
            handle: surface.lerp(&Color::WHITE, 0.35),
            focus_ring: Color::from_rgb8(0x5b, 0x8d, 0xef),
        }
    }

    /// Light appearance (`#f8f9fa` surface).
    #[must_use]
    pub fn light() -> Self {
        Self::from_surface(Color::from_rgb8(0xf8, 0xf9, 0xfa))
    }

    /// Dark appearance (`#2c2f40` surface).
    #[must_use]
    pub fn dark() -> Self {
        Self::from_surface(Color::from_rgb8(0x2c, 0x2f, 0x40))
    }
}

/// Palettes used for the off and on states.
///
/// The toggle switches between light and dark appearance: light when off,
/// dark when on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToggleTheme {
    /// Palette while off
    pub off: NeumorphicPalette,
    /// Palette while on
    pub on: NeumorphicPalette,
    /// Alpha multiplier applied while disabled
    pub disabled_alpha: f32,
}

impl Default for ToggleTheme {
    fn default() -> Self {
        Self {
            off: NeumorphicPalette::light(),
            on: NeumorphicPalette::dark(),
            disabled_alpha: 0.5,
        }
    }
}

impl ToggleTheme {
    /// Palette for the given state.
    #[must_use]
    pub const fn palette(&self, on: bool) -> &NeumorphicPalette {
        if on {
            &self.on
        } else {
            &self.off
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_and_dark_surfaces() {
        assert_eq!(NeumorphicPalette::light().surface.to_hex(), "#f8f9fa");
        assert_eq!(NeumorphicPalette::dark().surface.to_hex(), "#2c2f40");
    }

    #[test]
    fn test_shadow_darker_and_highlight_lighter_than_surface() {
        for palette in [NeumorphicPalette::light(), NeumorphicPalette::dark()] {
            let sum = |c: Color| c.r + c.g + c.b;
            assert!(sum(palette.shadow) < sum(palette.surface));
            assert!(sum(palette.highlight) > sum(palette.surface));
        }
    }

    #[test]
    fn test_theme_palette_selection() {
        let theme = ToggleTheme::default();
        assert_eq!(theme.palette(false), &NeumorphicPalette::light());
        assert_eq!(theme.palette(true), &NeumorphicPalette::dark());
    }

    #[test]
    fn test_theme_from_json_hex_colors() {
        let json = serde_json::to_string(&ToggleTheme::default()).unwrap();
        assert!(json.contains("\"surface\":\"#f8f9fa\""));

        let back: ToggleTheme = serde_json::from_str(&json).unwrap();
        assert_eq!(back.on.surface, NeumorphicPalette::dark().surface);
        assert_eq!(serde_json::to_string(&back).unwrap(), json);
    }
}
