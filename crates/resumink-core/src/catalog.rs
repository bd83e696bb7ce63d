//! Sidebar catalogue of addable items.

use crate::section::SectionType;

/// What a catalogue entry produces when added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    /// A built-in resume section.
    Section(SectionType),
    /// A decorative element. Listed in the sidebar but has no section model,
    /// so adding one is rejected.
    Decorative,
}

/// One entry in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub kind: CatalogKind,
}

impl CatalogEntry {
    /// The section type this entry adds, if it is addable.
    pub fn section_type(&self) -> Option<SectionType> {
        match self.kind {
            CatalogKind::Section(ty) => Some(ty),
            CatalogKind::Decorative => None,
        }
    }
}

const fn section(ty: SectionType, id: &'static str, label: &'static str, description: &'static str) -> CatalogEntry {
    CatalogEntry { id, label, description, kind: CatalogKind::Section(ty) }
}

const fn decorative(id: &'static str, label: &'static str, description: &'static str) -> CatalogEntry {
    CatalogEntry { id, label, description, kind: CatalogKind::Decorative }
}

/// The fixed sidebar catalogue, sections first.
pub const CATALOG: &[CatalogEntry] = &[
    section(SectionType::Header, "header", "Header", "Name, title, and contact info"),
    section(SectionType::Summary, "summary", "Professional Summary", "Brief overview of your background"),
    section(SectionType::Experience, "experience", "Work Experience", "Employment history and achievements"),
    section(SectionType::Education, "education", "Education", "Academic background and qualifications"),
    section(SectionType::Skills, "skills", "Skills", "Technical and soft skills"),
    decorative("text", "Text Block", "Custom text content"),
    decorative("image", "Image", "Profile photo or graphics"),
    decorative("shape", "Shape", "Rectangle or circle"),
    decorative("divider", "Divider", "Section separator line"),
];

/// Find a catalogue entry by id.
pub fn lookup(id: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.id == id)
}

/// Entries that add a resume section.
pub fn section_entries() -> impl Iterator<Item = &'static CatalogEntry> {
    CATALOG.iter().filter(|entry| entry.section_type().is_some())
}
