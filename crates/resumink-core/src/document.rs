//! The resume document: an ordered collection of sections.

use crate::section::{
    DataPatch, ItemPatch, ListField, Section, SectionId, SectionType, StylePatch,
    clamp_section_size,
};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use uuid::Uuid;

/// A resume document.
///
/// Array order is render order in flow layout and paint order in free-form
/// layout. Every mutator addressed by id is a no-op for an unknown id and
/// reports whether anything was applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDocument")]
pub struct ResumeDocument {
    sections: Vec<Section>,
}

/// A deserialized document that repeats a section id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate section id {0}")]
pub struct DuplicateSectionId(pub SectionId);

#[derive(Deserialize)]
struct RawDocument {
    sections: Vec<Section>,
}

impl TryFrom<RawDocument> for ResumeDocument {
    type Error = DuplicateSectionId;

    fn try_from(raw: RawDocument) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(raw.sections.len());
        for section in &raw.sections {
            if !seen.insert(section.id) {
                return Err(DuplicateSectionId(section.id));
            }
        }
        Ok(Self { sections: raw.sections })
    }
}

impl ResumeDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_id(&self) -> SectionId {
        loop {
            let id = Uuid::new_v4();
            if self.index_of(id).is_none() {
                return id;
            }
        }
    }

    /// Append a new section with default content and style.
    pub fn add_section(&mut self, section_type: SectionType, position: Point, size: Size) -> Section {
        let index = self.sections.len();
        self.insert_section(index, section_type, position, size)
    }

    /// Insert a new section at `index` (clamped to the document length).
    pub fn insert_section(
        &mut self,
        index: usize,
        section_type: SectionType,
        position: Point,
        size: Size,
    ) -> Section {
        let mut section = Section::new(section_type, position, size);
        section.id = self.fresh_id();
        let index = index.min(self.sections.len());
        self.sections.insert(index, section.clone());
        log::debug!("Inserted {} section {} at index {}", section_type, section.id, index);
        section
    }

    /// Shallow-merge a content patch. Patches for another type are ignored.
    pub fn update_data(&mut self, id: SectionId, patch: DataPatch) -> bool {
        let Some(section) = self.get_mut(id) else {
            return false;
        };
        let applied = section.data.apply(patch);
        if applied {
            log::debug!("Updated data of {} section {}", section.section_type(), id);
        } else {
            log::warn!("Ignored data patch of the wrong type for {} section {}", section.section_type(), id);
        }
        applied
    }

    /// Shallow-merge a style patch.
    pub fn update_style(&mut self, id: SectionId, patch: &StylePatch) -> bool {
        match self.get_mut(id) {
            Some(section) => {
                section.style.merge(patch);
                log::debug!("Updated style of section {}", id);
                true
            }
            None => false,
        }
    }

    /// Resize a section, clamping to the allowed bounds.
    pub fn update_size(&mut self, id: SectionId, size: Size) -> bool {
        match self.get_mut(id) {
            Some(section) => {
                section.size = clamp_section_size(size);
                log::debug!("Resized section {} to {}x{}", id, section.size.width, section.size.height);
                true
            }
            None => false,
        }
    }

    /// Move a section to a new top-left position.
    pub fn update_position(&mut self, id: SectionId, position: Point) -> bool {
        match self.get_mut(id) {
            Some(section) => {
                section.position = position;
                log::debug!("Moved section {} to ({}, {})", id, position.x, position.y);
                true
            }
            None => false,
        }
    }

    /// Remove a section from the document.
    pub fn delete_section(&mut self, id: SectionId) -> Option<Section> {
        let index = self.index_of(id)?;
        Some(self.sections.remove(index))
    }

    /// Append a placeholder entry to a list field.
    pub fn add_item(&mut self, id: SectionId, field: ListField) -> bool {
        let applied = self.get_mut(id).is_some_and(|s| s.data.add_item(field));
        if applied {
            log::debug!("Added {:?} entry to section {}", field, id);
        }
        applied
    }

    /// Merge a partial entry into `field[index]`.
    pub fn update_item(&mut self, id: SectionId, field: ListField, index: usize, patch: ItemPatch) -> bool {
        let applied = self.get_mut(id).is_some_and(|s| s.data.update_item(field, index, patch));
        if applied {
            log::debug!("Updated {:?}[{}] of section {}", field, index, id);
        }
        applied
    }

    /// Remove `field[index]`.
    pub fn remove_item(&mut self, id: SectionId, field: ListField, index: usize) -> bool {
        let applied = self.get_mut(id).is_some_and(|s| s.data.remove_item(field, index));
        if applied {
            log::debug!("Removed {:?}[{}] from section {}", field, index, id);
        }
        applied
    }

    /// Move the section at `from` so it ends up at `to`.
    /// Every other section keeps its relative order.
    pub fn move_section(&mut self, from: usize, to: usize) -> bool {
        if from >= self.sections.len() || to >= self.sections.len() {
            return false;
        }
        if from != to {
            let section = self.sections.remove(from);
            log::debug!("Moved section {} from index {} to {}", section.id, from, to);
            self.sections.insert(to, section);
        }
        true
    }

    /// Get a section by ID.
    pub fn get(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: SectionId) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == id)
    }

    /// Position of a section in document order.
    pub fn index_of(&self, id: SectionId) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    pub fn contains(&self, id: SectionId) -> bool {
        self.index_of(id).is_some()
    }

    /// Sections in document order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Section ids in document order.
    pub fn ids(&self) -> Vec<SectionId> {
        self.sections.iter().map(|s| s.id).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a document from JSON, rejecting duplicate section ids
    /// and clamping stored sizes.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{
        CssColor, DEFAULT_SECTION_SIZE, ExperienceItemPatch, SectionData, SummaryPatch,
    };

    fn doc_with(types: &[SectionType]) -> (ResumeDocument, Vec<SectionId>) {
        let mut doc = ResumeDocument::new();
        let ids = types
            .iter()
            .map(|&ty| doc.add_section(ty, Point::ZERO, DEFAULT_SECTION_SIZE).id())
            .collect();
        (doc, ids)
    }

    #[test]
    fn test_document_creation() {
        let doc = ResumeDocument::new();
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut doc = ResumeDocument::new();
        for _ in 0..50 {
            for &ty in SectionType::all() {
                doc.add_section(ty, Point::ZERO, DEFAULT_SECTION_SIZE);
            }
        }
        let unique: HashSet<_> = doc.ids().into_iter().collect();
        assert_eq!(unique.len(), doc.len());
    }

    #[test]
    fn test_update_style_merges() {
        let (mut doc, ids) = doc_with(&[SectionType::Summary]);
        assert!(doc.update_style(ids[0], &StylePatch { font_size: Some(20.0), ..Default::default() }));
        assert!(doc.update_style(ids[0], &StylePatch { color: Some("#fff".parse().unwrap()), ..Default::default() }));

        let style = doc.get(ids[0]).unwrap().style();
        assert_eq!(style.font_size, Some(20.0));
        assert_eq!(style.color, Some(CssColor::white()));
    }

    #[test]
    fn test_update_size_clamps() {
        let (mut doc, ids) = doc_with(&[SectionType::Header]);
        assert!(doc.update_size(ids[0], Size::new(1000.0, 50.0)));
        assert_eq!(doc.get(ids[0]).unwrap().size(), Size::new(800.0, 100.0));
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let (mut doc, _) = doc_with(&[SectionType::Header, SectionType::Skills]);
        let before = doc.clone();
        let ghost = Uuid::new_v4();

        assert!(!doc.update_data(ghost, DataPatch::Summary(SummaryPatch::default())));
        assert!(!doc.update_style(ghost, &StylePatch::default()));
        assert!(!doc.update_size(ghost, Size::new(300.0, 300.0)));
        assert!(!doc.update_position(ghost, Point::new(10.0, 10.0)));
        assert!(!doc.add_item(ghost, ListField::Skills));
        assert!(!doc.remove_item(ghost, ListField::Skills, 0));
        assert!(doc.delete_section(ghost).is_none());
        assert_eq!(doc, before);
    }

    #[test]
    fn test_update_data_keeps_type() {
        let (mut doc, ids) = doc_with(&[SectionType::Summary]);
        assert!(doc.update_data(
            ids[0],
            DataPatch::Summary(SummaryPatch { content: Some("Engineer.".to_string()) })
        ));
        assert!(!doc.update_data(ids[0], DataPatch::Experience(Default::default())));

        let section = doc.get(ids[0]).unwrap();
        assert_eq!(section.section_type(), SectionType::Summary);
        let SectionData::Summary(summary) = section.data() else { panic!("not a summary") };
        assert_eq!(summary.content, "Engineer.");
    }

    #[test]
    fn test_item_helpers_through_document() {
        let (mut doc, ids) = doc_with(&[SectionType::Experience]);
        assert!(doc.add_item(ids[0], ListField::Items));
        assert!(doc.update_item(
            ids[0],
            ListField::Items,
            1,
            ItemPatch::Experience(ExperienceItemPatch {
                company: Some("Acme".to_string()),
                ..Default::default()
            })
        ));
        assert!(doc.remove_item(ids[0], ListField::Items, 0));
        assert!(!doc.remove_item(ids[0], ListField::Items, 5));

        let SectionData::Experience(exp) = doc.get(ids[0]).unwrap().data() else {
            panic!("not experience")
        };
        assert_eq!(exp.items.len(), 1);
        assert_eq!(exp.items[0].company, "Acme");
    }

    #[test]
    fn test_move_section() {
        let (mut doc, ids) = doc_with(&[
            SectionType::Header,
            SectionType::Summary,
            SectionType::Experience,
            SectionType::Skills,
        ]);
        let before = doc.clone();

        assert!(doc.move_section(0, 2));
        assert_eq!(doc.ids(), vec![ids[1], ids[2], ids[0], ids[3]]);
        for id in &ids {
            assert_eq!(doc.get(*id), before.get(*id));
        }

        assert!(!doc.move_section(0, 4));
    }

    #[test]
    fn test_insert_section_clamps_index() {
        let (mut doc, ids) = doc_with(&[SectionType::Header]);
        let first = doc.insert_section(0, SectionType::Summary, Point::ZERO, DEFAULT_SECTION_SIZE);
        let last = doc.insert_section(99, SectionType::Skills, Point::ZERO, DEFAULT_SECTION_SIZE);
        assert_eq!(doc.ids(), vec![first.id(), ids[0], last.id()]);
    }

    #[test]
    fn test_delete_section() {
        let (mut doc, ids) = doc_with(&[SectionType::Header, SectionType::Skills]);
        let removed = doc.delete_section(ids[0]);
        assert_eq!(removed.map(|s| s.id()), Some(ids[0]));
        assert_eq!(doc.ids(), vec![ids[1]]);
    }

    #[test]
    fn test_json_round_trip() {
        let (doc, _) = doc_with(&[SectionType::Header, SectionType::Education]);
        let json = doc.to_json().unwrap();
        assert_eq!(ResumeDocument::from_json(&json).unwrap(), doc);
    }

    #[test]
    fn test_from_json_rejects_duplicate_ids() {
        let (mut doc, _) = doc_with(&[SectionType::Header]);
        let copy = doc.sections[0].clone();
        doc.sections.push(copy);
        let json = doc.to_json().unwrap();
        assert!(ResumeDocument::from_json(&json).is_err());
    }

    #[test]
    fn test_deserialize_checks_ids_and_sizes() {
        let (doc, ids) = doc_with(&[SectionType::Header, SectionType::Skills]);
        let mut value = serde_json::to_value(&doc).unwrap();
        value["sections"][1]["size"]["width"] = serde_json::json!(5000.0);

        let back: ResumeDocument = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(back.get(ids[1]).unwrap().size(), Size::new(800.0, 200.0));

        let first = value["sections"][0].clone();
        value["sections"][1]["id"] = first["id"].clone();
        assert!(serde_json::from_value::<ResumeDocument>(value).is_err());
    }
}
