//! Sparse style overrides for a section.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Allowed font size range (inclusive).
pub const FONT_SIZE_RANGE: (f64, f64) = (8.0, 72.0);
/// Allowed padding / bottom margin range (inclusive).
pub const SPACING_RANGE: (f64, f64) = (0.0, 100.0);

/// Render-time fallbacks for attributes that were never set.
pub const FALLBACK_FONT_SIZE: f64 = 14.0;
pub const FALLBACK_SPACING: f64 = 16.0;
pub const FALLBACK_FONT_FAMILY: &str = "Inter, sans-serif";

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid color: {0}")]
pub struct ColorParseError(pub String);

/// A CSS color as stored in section styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CssColor {
    Transparent,
    Rgba { r: u8, g: u8, b: u8, a: u8 },
}

impl CssColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgba { r, g, b, a: 255 }
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Check if the color paints nothing.
    pub fn is_transparent(&self) -> bool {
        matches!(self, CssColor::Transparent | CssColor::Rgba { a: 0, .. })
    }
}

impl FromStr for CssColor {
    type Err = ColorParseError;

    /// Accepts `transparent`, `#rgb`, `#rrggbb` and `#rrggbbaa`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("transparent") {
            return Ok(CssColor::Transparent);
        }

        let err = || ColorParseError(s.to_string());
        let hex = trimmed.strip_prefix('#').ok_or_else(err)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let byte = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).map_err(|_| err());

        match hex.len() {
            3 => {
                // #rgb -> #rrggbb
                let r = byte(0..1)? * 17;
                let g = byte(1..2)? * 17;
                let b = byte(2..3)? * 17;
                Ok(CssColor::rgb(r, g, b))
            }
            6 => Ok(CssColor::rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
            8 => Ok(CssColor::Rgba {
                r: byte(0..2)?,
                g: byte(2..4)?,
                b: byte(4..6)?,
                a: byte(6..8)?,
            }),
            _ => Err(err()),
        }
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CssColor::Transparent => f.write_str("transparent"),
            CssColor::Rgba { r, g, b, a: 255 } => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            CssColor::Rgba { r, g, b, a } => write!(f, "#{:02x}{:02x}{:02x}{:02x}", r, g, b, a),
        }
    }
}

impl TryFrom<String> for CssColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CssColor> for String {
    fn from(color: CssColor) -> Self {
        color.to_string()
    }
}

/// Error returned for a numeric weight outside the supported set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unsupported font weight: {0}")]
pub struct InvalidFontWeight(pub u16);

/// Font weights offered by the property panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum FontWeight {
    Light,
    #[default]
    Normal,
    Medium,
    SemiBold,
    Bold,
}

impl FontWeight {
    /// Numeric CSS weight.
    pub fn value(self) -> u16 {
        match self {
            FontWeight::Light => 300,
            FontWeight::Normal => 400,
            FontWeight::Medium => 500,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
        }
    }

    /// Get display name for UI.
    pub fn display_name(self) -> &'static str {
        match self {
            FontWeight::Light => "Light",
            FontWeight::Normal => "Normal",
            FontWeight::Medium => "Medium",
            FontWeight::SemiBold => "Semi Bold",
            FontWeight::Bold => "Bold",
        }
    }

    /// Get all available font weights.
    pub fn all() -> &'static [FontWeight] {
        &[
            FontWeight::Light,
            FontWeight::Normal,
            FontWeight::Medium,
            FontWeight::SemiBold,
            FontWeight::Bold,
        ]
    }
}

impl TryFrom<u16> for FontWeight {
    type Error = InvalidFontWeight;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        FontWeight::all()
            .iter()
            .copied()
            .find(|w| w.value() == value)
            .ok_or(InvalidFontWeight(value))
    }
}

impl From<FontWeight> for u16 {
    fn from(weight: FontWeight) -> Self {
        weight.value()
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Explicit style overrides stored on a section.
///
/// Every attribute is optional. The same type doubles as a partial update:
/// [`SectionStyle::merge`] copies only the attributes that are set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<CssColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<CssColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

/// A partial style update.
pub type StylePatch = SectionStyle;

impl SectionStyle {
    /// Style assigned to every freshly added section.
    pub fn initial() -> Self {
        Self {
            font_size: Some(FALLBACK_FONT_SIZE),
            font_weight: Some(FontWeight::Normal),
            color: Some(CssColor::black()),
            background_color: Some(CssColor::Transparent),
            padding: Some(FALLBACK_SPACING),
            margin_bottom: Some(FALLBACK_SPACING),
            text_align: None,
            font_family: None,
        }
    }

    /// Shallow-merge the set attributes of `patch` into `self`.
    ///
    /// Numeric attributes are clamped to their allowed ranges.
    pub fn merge(&mut self, patch: &StylePatch) {
        if let Some(size) = patch.font_size {
            self.font_size = Some(clamp(size, FONT_SIZE_RANGE));
        }
        if let Some(weight) = patch.font_weight {
            self.font_weight = Some(weight);
        }
        if let Some(color) = patch.color {
            self.color = Some(color);
        }
        if let Some(color) = patch.background_color {
            self.background_color = Some(color);
        }
        if let Some(padding) = patch.padding {
            self.padding = Some(clamp(padding, SPACING_RANGE));
        }
        if let Some(margin) = patch.margin_bottom {
            self.margin_bottom = Some(clamp(margin, SPACING_RANGE));
        }
        if let Some(align) = patch.text_align {
            self.text_align = Some(align);
        }
        if let Some(family) = &patch.font_family {
            self.font_family = Some(family.clone());
        }
    }

    /// Resolve every attribute, filling unset ones with render-time fallbacks.
    pub fn resolved(&self) -> ResolvedStyle {
        ResolvedStyle {
            font_size: self.font_size.unwrap_or(FALLBACK_FONT_SIZE),
            font_weight: self.font_weight.unwrap_or_default(),
            color: self.color.unwrap_or(CssColor::black()),
            background_color: self.background_color.unwrap_or(CssColor::Transparent),
            padding: self.padding.unwrap_or(FALLBACK_SPACING),
            margin_bottom: self.margin_bottom.unwrap_or(FALLBACK_SPACING),
            text_align: self.text_align.unwrap_or_default(),
            font_family: self
                .font_family
                .clone()
                .unwrap_or_else(|| FALLBACK_FONT_FAMILY.to_string()),
        }
    }
}

/// A fully resolved style, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub color: CssColor,
    pub background_color: CssColor,
    pub padding: f64,
    pub margin_bottom: f64,
    pub text_align: TextAlign,
    pub font_family: String,
}

fn clamp(value: f64, (min, max): (f64, f64)) -> f64 {
    if value.is_nan() { min } else { value.clamp(min, max) }
}
