//! Per-type section content and partial updates.

use super::SectionType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of an entry inside an experience or education list.
pub type ItemId = Uuid;

/// Skill appended by "add item" on a skills section.
pub const PLACEHOLDER_SKILL: &str = "New Skill";

/// Name, title and contact details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderData {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

/// Free-form professional summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryData {
    pub content: String,
}

/// One job in the experience list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub id: ItemId,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub description: String,
}

impl ExperienceItem {
    pub fn placeholder() -> Self {
        Self {
            id: Uuid::new_v4(),
            company: "Company Name".to_string(),
            position: "Job Title".to_string(),
            start_date: "2023".to_string(),
            end_date: "Present".to_string(),
            location: "City, State".to_string(),
            description: "Describe your responsibilities and achievements.".to_string(),
        }
    }

    fn merge(&mut self, patch: ExperienceItemPatch) {
        let ExperienceItemPatch { company, position, start_date, end_date, location, description } = patch;
        merge_field(&mut self.company, company);
        merge_field(&mut self.position, position);
        merge_field(&mut self.start_date, start_date);
        merge_field(&mut self.end_date, end_date);
        merge_field(&mut self.location, location);
        merge_field(&mut self.description, description);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceData {
    pub items: Vec<ExperienceItem>,
}

/// One degree in the education list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    pub id: ItemId,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

impl EducationItem {
    pub fn placeholder() -> Self {
        Self {
            id: Uuid::new_v4(),
            institution: "University Name".to_string(),
            degree: "Bachelor of Science".to_string(),
            field: "Your Field".to_string(),
            start_date: "2019".to_string(),
            end_date: "2023".to_string(),
            location: "City, State".to_string(),
            gpa: Some("3.8".to_string()),
        }
    }

    fn merge(&mut self, patch: EducationItemPatch) {
        let EducationItemPatch { institution, degree, field, start_date, end_date, location, gpa } = patch;
        merge_field(&mut self.institution, institution);
        merge_field(&mut self.degree, degree);
        merge_field(&mut self.field, field);
        merge_field(&mut self.start_date, start_date);
        merge_field(&mut self.end_date, end_date);
        merge_field(&mut self.location, location);
        merge_field(&mut self.gpa, gpa);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationData {
    pub items: Vec<EducationItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsData {
    pub skills: Vec<String>,
}

/// Section content, tagged by section type.
///
/// Serialized adjacently as `{"type": "...", "data": {...}}` so that a
/// section's JSON carries its type next to its content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum SectionData {
    Header(HeaderData),
    Summary(SummaryData),
    Experience(ExperienceData),
    Education(EducationData),
    Skills(SkillsData),
}

impl SectionData {
    /// Illustrative content for a freshly added section.
    pub fn placeholder(section_type: SectionType) -> Self {
        match section_type {
            SectionType::Header => SectionData::Header(HeaderData {
                name: "Your Name".to_string(),
                title: "Professional Title".to_string(),
                email: "email@example.com".to_string(),
                phone: "+1 (555) 123-4567".to_string(),
                location: "City, State".to_string(),
                website: Some("yourwebsite.com".to_string()),
                profile_image: None,
            }),
            SectionType::Summary => SectionData::Summary(SummaryData {
                content: "Write a compelling professional summary that highlights your key strengths and career objectives.".to_string(),
            }),
            SectionType::Experience => SectionData::Experience(ExperienceData {
                items: vec![ExperienceItem::placeholder()],
            }),
            SectionType::Education => SectionData::Education(EducationData {
                items: vec![EducationItem::placeholder()],
            }),
            SectionType::Skills => SectionData::Skills(SkillsData {
                skills: vec![
                    "Communication".to_string(),
                    "Leadership".to_string(),
                    "Problem Solving".to_string(),
                ],
            }),
        }
    }

    /// The section type this content belongs to.
    pub fn section_type(&self) -> SectionType {
        match self {
            SectionData::Header(_) => SectionType::Header,
            SectionData::Summary(_) => SectionType::Summary,
            SectionData::Experience(_) => SectionType::Experience,
            SectionData::Education(_) => SectionType::Education,
            SectionData::Skills(_) => SectionType::Skills,
        }
    }

    /// Merge a partial update. Returns false (and changes nothing) when the
    /// patch targets a different section type.
    pub fn apply(&mut self, patch: DataPatch) -> bool {
        match (self, patch) {
            (SectionData::Header(data), DataPatch::Header(patch)) => {
                let HeaderPatch { name, title, email, phone, location, website, profile_image } = patch;
                merge_field(&mut data.name, name);
                merge_field(&mut data.title, title);
                merge_field(&mut data.email, email);
                merge_field(&mut data.phone, phone);
                merge_field(&mut data.location, location);
                merge_field(&mut data.website, website);
                merge_field(&mut data.profile_image, profile_image);
                true
            }
            (SectionData::Summary(data), DataPatch::Summary(patch)) => {
                merge_field(&mut data.content, patch.content);
                true
            }
            (SectionData::Experience(data), DataPatch::Experience(patch)) => {
                merge_field(&mut data.items, patch.items);
                true
            }
            (SectionData::Education(data), DataPatch::Education(patch)) => {
                merge_field(&mut data.items, patch.items);
                true
            }
            (SectionData::Skills(data), DataPatch::Skills(patch)) => {
                merge_field(&mut data.skills, patch.skills);
                true
            }
            _ => false,
        }
    }

    /// The list field this content exposes, if any.
    pub fn list_field(&self) -> Option<ListField> {
        match self {
            SectionData::Experience(_) | SectionData::Education(_) => Some(ListField::Items),
            SectionData::Skills(_) => Some(ListField::Skills),
            SectionData::Header(_) | SectionData::Summary(_) => None,
        }
    }

    /// Number of entries in `field`, or `None` if the field does not exist.
    pub fn item_count(&self, field: ListField) -> Option<usize> {
        match (self, field) {
            (SectionData::Experience(data), ListField::Items) => Some(data.items.len()),
            (SectionData::Education(data), ListField::Items) => Some(data.items.len()),
            (SectionData::Skills(data), ListField::Skills) => Some(data.skills.len()),
            _ => None,
        }
    }

    /// Append the type's placeholder entry to `field`.
    pub fn add_item(&mut self, field: ListField) -> bool {
        match (self, field) {
            (SectionData::Experience(data), ListField::Items) => {
                data.items.push(ExperienceItem::placeholder());
                true
            }
            (SectionData::Education(data), ListField::Items) => {
                data.items.push(EducationItem::placeholder());
                true
            }
            (SectionData::Skills(data), ListField::Skills) => {
                data.skills.push(PLACEHOLDER_SKILL.to_string());
                true
            }
            _ => false,
        }
    }

    /// Merge a partial entry into `field[index]`.
    pub fn update_item(&mut self, field: ListField, index: usize, patch: ItemPatch) -> bool {
        match (self, field, patch) {
            (SectionData::Experience(data), ListField::Items, ItemPatch::Experience(patch)) => {
                match data.items.get_mut(index) {
                    Some(item) => {
                        item.merge(patch);
                        true
                    }
                    None => false,
                }
            }
            (SectionData::Education(data), ListField::Items, ItemPatch::Education(patch)) => {
                match data.items.get_mut(index) {
                    Some(item) => {
                        item.merge(patch);
                        true
                    }
                    None => false,
                }
            }
            (SectionData::Skills(data), ListField::Skills, ItemPatch::Skill(skill)) => {
                match data.skills.get_mut(index) {
                    Some(slot) => {
                        *slot = skill;
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        }
    }

    /// Remove `field[index]`.
    pub fn remove_item(&mut self, field: ListField, index: usize) -> bool {
        match self.item_count(field) {
            Some(len) if index < len => {}
            _ => return false,
        }
        match self {
            SectionData::Experience(data) => {
                data.items.remove(index);
            }
            SectionData::Education(data) => {
                data.items.remove(index);
            }
            SectionData::Skills(data) => {
                data.skills.remove(index);
            }
            SectionData::Header(_) | SectionData::Summary(_) => return false,
        }
        true
    }
}

/// Array-valued fields that support item add/update/remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListField {
    /// `items` of experience and education sections.
    Items,
    /// `skills` of a skills section.
    Skills,
}

/// Partial header update. `website`/`profile_image` use `Some(None)` to clear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<Option<String>>,
    pub profile_image: Option<Option<String>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryPatch {
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperiencePatch {
    pub items: Option<Vec<ExperienceItem>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EducationPatch {
    pub items: Option<Vec<EducationItem>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillsPatch {
    pub skills: Option<Vec<String>>,
}

/// A shallow partial update of a section's content.
#[derive(Debug, Clone, PartialEq)]
pub enum DataPatch {
    Header(HeaderPatch),
    Summary(SummaryPatch),
    Experience(ExperiencePatch),
    Education(EducationPatch),
    Skills(SkillsPatch),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperienceItemPatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EducationItemPatch {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub gpa: Option<Option<String>>,
}

/// A partial update of one list entry. Item ids are never patched.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemPatch {
    Experience(ExperienceItemPatch),
    Education(EducationItemPatch),
    Skill(String),
}

fn merge_field<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Split comma-separated skill input into trimmed, non-empty entries.
pub fn parse_skill_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
