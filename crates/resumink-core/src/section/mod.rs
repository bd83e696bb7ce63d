//! Resume section definitions.

mod data;
mod style;

pub use data::{
    DataPatch, EducationData, EducationItem, EducationItemPatch, EducationPatch, ExperienceData,
    ExperienceItem, ExperienceItemPatch, ExperiencePatch, HeaderData, HeaderPatch, ItemId,
    ItemPatch, ListField, PLACEHOLDER_SKILL, SectionData, SkillsData, SkillsPatch, SummaryData,
    SummaryPatch, parse_skill_list,
};
pub use style::{
    ColorParseError, CssColor, FONT_SIZE_RANGE, FontWeight, InvalidFontWeight, ResolvedStyle,
    SPACING_RANGE, SectionStyle, StylePatch, TextAlign,
};

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a section.
pub type SectionId = Uuid;

/// Smallest size a section can be resized to.
pub const MIN_SECTION_SIZE: Size = Size::new(200.0, 100.0);
/// Largest size a section can be resized to.
pub const MAX_SECTION_SIZE: Size = Size::new(800.0, 600.0);
/// Size given to newly added sections.
pub const DEFAULT_SECTION_SIZE: Size = Size::new(400.0, 200.0);

/// Clamp a size into the allowed section bounds.
pub fn clamp_section_size(size: Size) -> Size {
    let axis = |value: f64, min: f64, max: f64| if value.is_nan() { min } else { value.clamp(min, max) };
    Size::new(
        axis(size.width, MIN_SECTION_SIZE.width, MAX_SECTION_SIZE.width),
        axis(size.height, MIN_SECTION_SIZE.height, MAX_SECTION_SIZE.height),
    )
}

/// The closed set of built-in section kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Header,
    Summary,
    Experience,
    Education,
    Skills,
}

impl SectionType {
    /// Catalogue id, also used in serialized form.
    pub fn id(self) -> &'static str {
        match self {
            SectionType::Header => "header",
            SectionType::Summary => "summary",
            SectionType::Experience => "experience",
            SectionType::Education => "education",
            SectionType::Skills => "skills",
        }
    }

    /// Human-readable label shown in the sidebar and notifications.
    pub fn label(self) -> &'static str {
        match self {
            SectionType::Header => "Header",
            SectionType::Summary => "Professional Summary",
            SectionType::Experience => "Work Experience",
            SectionType::Education => "Education",
            SectionType::Skills => "Skills",
        }
    }

    pub fn all() -> &'static [SectionType] {
        &[
            SectionType::Header,
            SectionType::Summary,
            SectionType::Experience,
            SectionType::Education,
            SectionType::Skills,
        ]
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when a string does not name a section type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown section type: {0}")]
pub struct UnknownSectionType(pub String);

impl FromStr for SectionType {
    type Err = UnknownSectionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionType::all()
            .iter()
            .copied()
            .find(|ty| ty.id() == s)
            .ok_or_else(|| UnknownSectionType(s.to_string()))
    }
}

/// One addressable content block of the resume.
///
/// The section type is carried by [`SectionData`], so content and type
/// can never disagree. Fields are only mutable inside the crate; the
/// document enforces id uniqueness. Sizes are clamped on construction
/// and on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSection")]
pub struct Section {
    pub(crate) id: SectionId,
    pub(crate) position: Point,
    pub(crate) size: Size,
    #[serde(flatten)]
    pub(crate) data: SectionData,
    pub(crate) style: SectionStyle,
}

/// Wire form of [`Section`] before size bounds are applied.
#[derive(Deserialize)]
struct RawSection {
    id: SectionId,
    position: Point,
    size: Size,
    #[serde(flatten)]
    data: SectionData,
    style: SectionStyle,
}

impl From<RawSection> for Section {
    fn from(raw: RawSection) -> Self {
        Self {
            id: raw.id,
            position: raw.position,
            size: clamp_section_size(raw.size),
            data: raw.data,
            style: raw.style,
        }
    }
}

impl Section {
    /// Create a section with placeholder content and the initial style.
    pub fn new(section_type: SectionType, position: Point, size: Size) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            size: clamp_section_size(size),
            data: SectionData::placeholder(section_type),
            style: SectionStyle::initial(),
        }
    }

    pub fn id(&self) -> SectionId {
        self.id
    }

    pub fn section_type(&self) -> SectionType {
        self.data.section_type()
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn data(&self) -> &SectionData {
        &self.data
    }

    pub fn style(&self) -> &SectionStyle {
        &self.style
    }

    /// Bounding box in canvas coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_type_round_trip() {
        for &ty in SectionType::all() {
            assert_eq!(ty.id().parse::<SectionType>(), Ok(ty));
        }
        assert!("divider".parse::<SectionType>().is_err());
    }

    #[test]
    fn test_clamp_section_size() {
        assert_eq!(clamp_section_size(Size::new(1000.0, 50.0)), Size::new(800.0, 100.0));
        assert_eq!(clamp_section_size(Size::new(150.0, 700.0)), Size::new(200.0, 600.0));
        assert_eq!(clamp_section_size(Size::new(300.0, 300.0)), Size::new(300.0, 300.0));
    }

    #[test]
    fn test_new_section_defaults() {
        let section = Section::new(SectionType::Skills, Point::new(50.0, 50.0), DEFAULT_SECTION_SIZE);
        assert_eq!(section.section_type(), SectionType::Skills);
        assert_eq!(section.size(), Size::new(400.0, 200.0));
        assert_eq!(section.style(), &SectionStyle::initial());
        assert_eq!(section.bounds(), Rect::new(50.0, 50.0, 450.0, 250.0));
    }

    #[test]
    fn test_section_json_shape() {
        let section = Section::new(SectionType::Header, Point::new(50.0, 170.0), DEFAULT_SECTION_SIZE);
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["type"], "header");
        assert_eq!(json["data"]["name"], "Your Name");
        assert_eq!(json["position"]["y"], 170.0);
        assert_eq!(json["size"]["width"], 400.0);

        let back: Section = serde_json::from_value(json).unwrap();
        assert_eq!(back, section);
    }

    #[test]
    fn test_deserialize_clamps_size() {
        let section = Section::new(SectionType::Summary, Point::ZERO, DEFAULT_SECTION_SIZE);
        let mut json = serde_json::to_value(&section).unwrap();
        json["size"]["width"] = serde_json::json!(5000.0);
        json["size"]["height"] = serde_json::json!(20.0);

        let back: Section = serde_json::from_value(json).unwrap();
        assert_eq!(back.size(), Size::new(800.0, 100.0));
    }
}
