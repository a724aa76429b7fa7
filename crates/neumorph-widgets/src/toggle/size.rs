//! Size resolution for the neumorphic toggle.
//!
//! A toggle is sized by its *base height*. Everything else is derived from it:
//! the outer box adds 8% border spacing per side, the outer width is always
//! 2.1 times the outer height, and the handle sits inside the base height with
//! a 4px margin on every side.
//!
//! Input is forgiving. Any string that is not a preset name is used verbatim
//! as a CSS length, and any value that is neither a number nor a string falls
//! back to the medium preset.

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Border spacing as a fraction of the base height (8% per side).
pub const BORDER_SPACING_RATIO: f64 = 0.08 * 2.0;

/// Outer width as a multiple of the outer height.
pub const WIDTH_RATIO: f64 = 2.1;

/// Margin between the handle and the track edge, in pixels.
pub const HANDLE_MARGIN_PX: f64 = 4.0;

/// Root font size used to resolve `rem`/`em` lengths when none is configured.
pub const DEFAULT_ROOT_FONT_SIZE: f32 = 16.0;

/// Named size shorthands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizePreset {
    /// 32px base height
    Small,
    /// 40px base height
    #[default]
    Medium,
    /// 48px base height
    Large,
}

impl SizePreset {
    /// All presets, smallest first.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Base height in pixels.
    #[must_use]
    pub const fn base_px(self) -> f64 {
        match self {
            Self::Small => 32.0,
            Self::Medium => 40.0,
            Self::Large => 48.0,
        }
    }

    /// Preset name as accepted in configuration.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Look up a preset by exact name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.name() == name)
    }
}

/// Size input for a toggle: pixels, an opaque CSS length, or a preset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "SizeInput")]
pub enum ToggleSize {
    /// Base height in pixels.
    Pixels(f64),
    /// Base height as a CSS length with embedded unit, used verbatim.
    Length(String),
    /// Named preset.
    Preset(SizePreset),
}

impl Default for ToggleSize {
    fn default() -> Self {
        Self::Preset(SizePreset::Medium)
    }
}

impl From<f64> for ToggleSize {
    fn from(px: f64) -> Self {
        Self::Pixels(px)
    }
}

impl From<f32> for ToggleSize {
    fn from(px: f32) -> Self {
        Self::Pixels(f64::from(px))
    }
}

impl From<i32> for ToggleSize {
    fn from(px: i32) -> Self {
        Self::Pixels(f64::from(px))
    }
}

impl From<SizePreset> for ToggleSize {
    fn from(preset: SizePreset) -> Self {
        Self::Preset(preset)
    }
}

impl From<&str> for ToggleSize {
    fn from(value: &str) -> Self {
        SizePreset::from_name(value).map_or_else(|| Self::Length(value.to_string()), Self::Preset)
    }
}

impl From<String> for ToggleSize {
    fn from(value: String) -> Self {
        match SizePreset::from_name(&value) {
            Some(preset) => Self::Preset(preset),
            None => Self::Length(value),
        }
    }
}

/// Wire shape of a size value in configuration documents.
#[derive(Deserialize)]
#[serde(untagged)]
enum SizeInput {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

impl From<SizeInput> for ToggleSize {
    fn from(input: SizeInput) -> Self {
        match input {
            SizeInput::Number(px) => Self::Pixels(px),
            SizeInput::Text(text) => Self::from(text),
            SizeInput::Other(_) => Self::default(),
        }
    }
}

impl Serialize for ToggleSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Pixels(px) => serializer.serialize_f64(*px),
            Self::Length(text) => serializer.serialize_str(text),
            Self::Preset(preset) => serializer.serialize_str(preset.name()),
        }
    }
}

impl ToggleSize {
    /// Resolve this size into concrete dimensions.
    #[must_use]
    pub fn resolve(&self) -> DimensionSet {
        let (base_height, base) = match self {
            Self::Pixels(px) => (format!("{px}px"), CssLength::px(*px)),
            Self::Length(text) => (text.clone(), CssLength::parse(text)),
            Self::Preset(preset) => {
                let px = preset.base_px();
                (format!("{px}px"), CssLength::px(px))
            }
        };

        let (height, width, toggle_width) = match &base {
            CssLength::Dimension { value, unit } => {
                let border_spacing = value * BORDER_SPACING_RATIO;
                let outer = value + border_spacing;
                (
                    CssLength::dimension(outer, unit),
                    CssLength::dimension(outer * WIDTH_RATIO, unit),
                    CssLength::dimension(value * 3.0, unit),
                )
            }
            CssLength::Raw(raw) => {
                let outer_ratio = 1.0 + BORDER_SPACING_RATIO;
                (
                    CssLength::Raw(format!("calc({raw} * {outer_ratio})")),
                    CssLength::Raw(format!("calc({raw} * {})", outer_ratio * WIDTH_RATIO)),
                    CssLength::Raw(format!("calc({raw} * 3)")),
                )
            }
        };

        DimensionSet {
            handle_size: format!("calc({base_height} - {}px)", HANDLE_MARGIN_PX * 2.0),
            handle_width: format!("calc({base_height} - 2 * var(--handle-margin))"),
            base_height,
            height,
            width,
            toggle_width,
            base,
        }
    }
}

/// A CSS length: a number with a unit, or an expression kept as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CssLength {
    /// Numeric value with unit suffix (may be empty).
    Dimension {
        /// Numeric value
        value: f64,
        /// Unit suffix such as `px` or `rem`
        unit: String,
    },
    /// Anything without a leading number, e.g. `var(--h)`.
    Raw(String),
}

impl CssLength {
    /// A pixel length.
    #[must_use]
    pub fn px(value: f64) -> Self {
        Self::dimension(value, "px")
    }

    /// A length with the given unit.
    #[must_use]
    pub fn dimension(value: f64, unit: &str) -> Self {
        Self::Dimension {
            value,
            unit: unit.to_string(),
        }
    }

    /// Parse a length the way CSS hosts read a leading float.
    ///
    /// The longest numeric prefix becomes the value and the trimmed remainder
    /// the unit. Text without a numeric prefix is kept as [`CssLength::Raw`].
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        let split = numeric_prefix_len(trimmed);
        match trimmed[..split].parse::<f64>() {
            Ok(value) if split > 0 => Self::dimension(value, trimmed[split..].trim()),
            _ => Self::Raw(text.to_string()),
        }
    }

    /// Numeric part, if any.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Dimension { value, .. } => Some(*value),
            Self::Raw(_) => None,
        }
    }

    /// Unit part, if any.
    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        match self {
            Self::Dimension { unit, .. } => Some(unit),
            Self::Raw(_) => None,
        }
    }

    /// Resolve to device pixels.
    ///
    /// `px` and unitless values map directly, `rem`/`em` scale by the root
    /// font size. Other units have no fixed pixel size and yield `None`.
    #[must_use]
    pub fn to_px(&self, root_font_size: f32) -> Option<f32> {
        match self {
            Self::Dimension { value, unit } => match unit.as_str() {
                "px" | "" => Some(*value as f32),
                "rem" | "em" => Some(*value as f32 * root_font_size),
                _ => None,
            },
            Self::Raw(_) => None,
        }
    }
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dimension { value, unit } => write!(f, "{value}{unit}"),
            Self::Raw(raw) => f.write_str(raw),
        }
    }
}

/// Byte length of the leading float literal in `text` (0 if none).
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    // Exponent only counts when at least one digit follows it.
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

/// Concrete dimensions derived from a [`ToggleSize`].
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionSet {
    /// Base height as CSS text (verbatim for string input).
    pub base_height: String,
    /// Outer height: base height plus border spacing.
    pub height: CssLength,
    /// Outer width: outer height times 2.1.
    pub width: CssLength,
    /// Handle diameter as a deferred `calc()` expression.
    pub handle_size: String,
    /// Value of the `--toggle-width` custom property.
    pub toggle_width: CssLength,
    /// Value of the `--handle-width` custom property.
    pub handle_width: String,
    base: CssLength,
}

impl DimensionSet {
    /// Parsed base height.
    #[must_use]
    pub const fn base(&self) -> &CssLength {
        &self.base
    }

    /// Inline style declarations in the order the control publishes them.
    #[must_use]
    pub fn style_declarations(&self) -> Vec<(&'static str, String)> {
        vec![
            ("width", self.width.to_string()),
            ("height", self.height.to_string()),
            ("--handle-size", self.handle_size.clone()),
            ("--toggle-width", self.toggle_width.to_string()),
            ("--toggle-height", self.base_height.clone()),
            ("--handle-width", self.handle_width.clone()),
        ]
    }

    /// Pixel geometry for painting, if every length has a pixel size.
    #[must_use]
    pub fn pixel_geometry(&self, root_font_size: f32) -> Option<PixelGeometry> {
        let base = self.base.to_px(root_font_size)?;
        let height = self.height.to_px(root_font_size)?;
        let width = self.width.to_px(root_font_size)?;
        Some(PixelGeometry {
            width,
            height,
            base,
            handle_diameter: (base - (HANDLE_MARGIN_PX * 2.0) as f32).max(0.0),
        })
    }
}

/// Toggle dimensions in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelGeometry {
    /// Outer width
    pub width: f32,
    /// Outer height
    pub height: f32,
    /// Base (track) height
    pub base: f32,
    /// Handle circle diameter
    pub handle_diameter: f32,
}

impl PixelGeometry {
    /// Geometry of the medium preset, used when a length cannot be resolved.
    #[must_use]
    pub fn fallback() -> Self {
        ToggleSize::default()
            .resolve()
            .pixel_geometry(DEFAULT_ROOT_FONT_SIZE)
            .unwrap_or(Self {
                width: 97.44,
                height: 46.4,
                base: 40.0,
                handle_diameter: 32.0,
            })
    }

    /// Border spacing on each side of the track.
    #[must_use]
    pub fn border_inset(&self) -> f32 {
        ((self.height - self.base) / 2.0).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9 * b.abs().max(1.0)
    }

    // ===== Preset Tests =====

    #[test]
    fn test_preset_base_heights() {
        assert_eq!(SizePreset::Small.base_px(), 32.0);
        assert_eq!(SizePreset::Medium.base_px(), 40.0);
        assert_eq!(SizePreset::Large.base_px(), 48.0);
    }

    #[test]
    fn test_preset_from_name() {
        assert_eq!(SizePreset::from_name("small"), Some(SizePreset::Small));
        assert_eq!(SizePreset::from_name("large"), Some(SizePreset::Large));
        assert_eq!(SizePreset::from_name("Large"), None);
        assert_eq!(SizePreset::from_name("huge"), None);
    }

    #[test]
    fn test_preset_resolves_to_pixel_base() {
        for preset in SizePreset::ALL {
            let dims = ToggleSize::Preset(preset).resolve();
            assert_eq!(dims.base(), &CssLength::px(preset.base_px()));
            assert_eq!(dims.base_height, format!("{}px", preset.base_px()));
        }
    }

    #[test]
    fn test_default_size_is_medium() {
        assert_eq!(ToggleSize::default(), ToggleSize::Preset(SizePreset::Medium));
        let dims = ToggleSize::default().resolve();
        assert_eq!(dims.base_height, "40px");
        assert_eq!(dims.handle_size, "calc(40px - 8px)");
    }

    // ===== Conversion Tests =====

    #[test]
    fn test_from_str_classifies_presets_and_lengths() {
        assert_eq!(ToggleSize::from("small"), ToggleSize::Preset(SizePreset::Small));
        assert_eq!(ToggleSize::from("5rem"), ToggleSize::Length("5rem".to_string()));
        assert_eq!(
            ToggleSize::from("extra-large".to_string()),
            ToggleSize::Length("extra-large".to_string())
        );
        assert_eq!(ToggleSize::from(35), ToggleSize::Pixels(35.0));
    }

    // ===== Resolution Tests =====

    #[test]
    fn test_numeric_size_dimensions() {
        let dims = ToggleSize::Pixels(35.0).resolve();
        assert_eq!(dims.base_height, "35px");
        let height = dims.height.value().unwrap();
        let width = dims.width.value().unwrap();
        assert!(approx(height, 35.0 + 0.16 * 35.0));
        assert!(approx(width, 2.1 * (35.0 + 0.16 * 35.0)));
        assert_eq!(dims.height.unit(), Some("px"));
        assert_eq!(dims.width.unit(), Some("px"));
        assert_eq!(dims.handle_size, "calc(35px - 8px)");
    }

    #[test]
    fn test_css_length_keeps_unit() {
        let dims = ToggleSize::from("5rem").resolve();
        assert_eq!(dims.base_height, "5rem");
        assert_eq!(dims.height.unit(), Some("rem"));
        assert!(approx(dims.height.value().unwrap(), 5.8));
        assert!(approx(dims.width.value().unwrap(), 5.8 * 2.1));
        assert_eq!(dims.handle_size, "calc(5rem - 8px)");
        assert_eq!(dims.toggle_width, CssLength::dimension(15.0, "rem"));
        assert_eq!(
            dims.handle_width,
            "calc(5rem - 2 * var(--handle-margin))"
        );
    }

    #[test]
    fn test_unrecognized_string_is_literal_length() {
        let dims = ToggleSize::from("var(--toggle-h)").resolve();
        assert_eq!(dims.base_height, "var(--toggle-h)");
        assert_eq!(dims.base(), &CssLength::Raw("var(--toggle-h)".to_string()));
        assert!(dims.height.to_string().starts_with("calc(var(--toggle-h) * 1.16"));
        assert!(dims.width.to_string().starts_with("calc(var(--toggle-h) * 2.43"));
        assert_eq!(dims.handle_size, "calc(var(--toggle-h) - 8px)");
    }

    #[test]
    fn test_negative_pixels_are_not_rejected() {
        let dims = ToggleSize::Pixels(-10.0).resolve();
        assert_eq!(dims.base_height, "-10px");
        assert!(approx(dims.height.value().unwrap(), -11.6));
    }

    #[test]
    fn test_style_declarations_order() {
        let dims = ToggleSize::default().resolve();
        let names: Vec<_> = dims.style_declarations().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            names,
            vec![
                "width",
                "height",
                "--handle-size",
                "--toggle-width",
                "--toggle-height",
                "--handle-width"
            ]
        );
    }

    // ===== CssLength Tests =====

    #[test]
    fn test_css_length_parse() {
        assert_eq!(CssLength::parse("3rem"), CssLength::dimension(3.0, "rem"));
        assert_eq!(CssLength::parse("2.5em"), CssLength::dimension(2.5, "em"));
        assert_eq!(CssLength::parse(".5vh"), CssLength::dimension(0.5, "vh"));
        assert_eq!(CssLength::parse("-4px"), CssLength::dimension(-4.0, "px"));
        assert_eq!(CssLength::parse("1e1px"), CssLength::dimension(10.0, "px"));
        assert_eq!(CssLength::parse("2em"), CssLength::dimension(2.0, "em"));
        assert_eq!(CssLength::parse("48"), CssLength::dimension(48.0, ""));
        assert_eq!(CssLength::parse("auto"), CssLength::Raw("auto".to_string()));
        assert_eq!(CssLength::parse("."), CssLength::Raw(".".to_string()));
        assert_eq!(CssLength::parse(""), CssLength::Raw(String::new()));
    }

    #[test]
    fn test_css_length_to_px() {
        assert_eq!(CssLength::px(40.0).to_px(16.0), Some(40.0));
        assert_eq!(CssLength::dimension(3.0, "rem").to_px(16.0), Some(48.0));
        assert_eq!(CssLength::dimension(3.0, "em").to_px(10.0), Some(30.0));
        assert_eq!(CssLength::dimension(3.0, "vh").to_px(16.0), None);
        assert_eq!(CssLength::Raw("auto".to_string()).to_px(16.0), None);
    }

    #[test]
    fn test_css_length_display() {
        assert_eq!(CssLength::px(46.4).to_string(), "46.4px");
        assert_eq!(CssLength::px(40.0).to_string(), "40px");
        assert_eq!(CssLength::Raw("auto".to_string()).to_string(), "auto");
    }

    // ===== Pixel Geometry Tests =====

    #[test]
    fn test_pixel_geometry_medium() {
        let geo = ToggleSize::default()
            .resolve()
            .pixel_geometry(DEFAULT_ROOT_FONT_SIZE)
            .unwrap();
        assert_eq!(geo.base, 40.0);
        assert!((geo.height - 46.4).abs() < 1e-3);
        assert!((geo.width - 97.44).abs() < 1e-3);
        assert_eq!(geo.handle_diameter, 32.0);
        assert!((geo.border_inset() - 3.2).abs() < 1e-3);
    }

    #[test]
    fn test_pixel_geometry_unresolvable_unit() {
        let dims = ToggleSize::from("10vw").resolve();
        assert!(dims.pixel_geometry(DEFAULT_ROOT_FONT_SIZE).is_none());
        assert_eq!(PixelGeometry::fallback().base, 40.0);
    }

    #[test]
    fn test_handle_diameter_never_negative() {
        let geo = ToggleSize::Pixels(4.0)
            .resolve()
            .pixel_geometry(DEFAULT_ROOT_FONT_SIZE)
            .unwrap();
        assert_eq!(geo.handle_diameter, 0.0);
    }

    // ===== Serde Tests =====

    #[test]
    fn test_size_deserialize_variants() {
        let px: ToggleSize = serde_json::from_str("35").unwrap();
        assert_eq!(px, ToggleSize::Pixels(35.0));

        let preset: ToggleSize = serde_json::from_str("\"large\"").unwrap();
        assert_eq!(preset, ToggleSize::Preset(SizePreset::Large));

        let length: ToggleSize = serde_json::from_str("\"5rem\"").unwrap();
        assert_eq!(length, ToggleSize::Length("5rem".to_string()));
    }

    #[test]
    fn test_size_deserialize_unrecognized_falls_back_to_medium() {
        let size: ToggleSize = serde_json::from_str("true").unwrap();
        assert_eq!(size, ToggleSize::Preset(SizePreset::Medium));

        let size: ToggleSize = serde_json::from_str("{\"h\": 3}").unwrap();
        assert_eq!(size, ToggleSize::Preset(SizePreset::Medium));
    }

    #[test]
    fn test_size_serialize() {
        assert_eq!(serde_json::to_string(&ToggleSize::Pixels(35.0)).unwrap(), "35.0");
        assert_eq!(
            serde_json::to_string(&ToggleSize::Preset(SizePreset::Small)).unwrap(),
            "\"small\""
        );
        assert_eq!(
            serde_json::to_string(&ToggleSize::Length("3rem".to_string())).unwrap(),
            "\"3rem\""
        );
    }

    proptest! {
        #[test]
        fn prop_numeric_outer_dimensions(n in -1000.0f64..1000.0) {
            let dims = ToggleSize::Pixels(n).resolve();
            let height = dims.height.value().unwrap();
            let width = dims.width.value().unwrap();
            prop_assert!(approx(height, n + 0.16 * n));
            prop_assert!(approx(width, 2.1 * (n + 0.16 * n)));
            prop_assert_eq!(dims.width.unit(), Some("px"));
        }

        #[test]
        fn prop_width_always_derived_from_height(n in 0.1f64..500.0, unit in "(px|rem|em|vh|pt)") {
            let dims = ToggleSize::Length(format!("{n}{unit}")).resolve();
            let height = dims.height.value().unwrap();
            let width = dims.width.value().unwrap();
            prop_assert!(approx(width, height * WIDTH_RATIO));
            prop_assert_eq!(dims.height.unit(), Some(unit.as_str()));
        }

        #[test]
        fn prop_non_preset_strings_are_verbatim(text in "[a-z][a-z0-9()-]{0,12}") {
            prop_assume!(SizePreset::from_name(&text).is_none());
            let dims = ToggleSize::from(text.as_str()).resolve();
            prop_assert_eq!(dims.base_height, text);
        }
    }
}
