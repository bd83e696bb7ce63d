//! Editor: selection and mutation controller.

use crate::catalog;
use crate::config::{ConfigError, EditorConfig, LayoutMode};
use crate::document::ResumeDocument;
use crate::drag::{DragCommit, DragError, DragOutcome, DragSession, DragSource, DropTarget};
use crate::export::{BoxFuture, DocumentSnapshot, ExportArtifact, ExportResult, Exporter};
use crate::notify::{Notification, NotificationQueue};
use crate::placement::PlacementEngine;
use crate::section::{
    DataPatch, ItemPatch, ListField, Section, SectionId, SectionType, SkillsPatch, StylePatch,
    parse_skill_list,
};
use crate::selection::Selection;
use kurbo::{Point, Size};
use thiserror::Error;

/// Editor errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("Unknown section: {0}")]
    UnknownSection(SectionId),
    #[error("Invalid section type: {0}")]
    InvalidSectionType(String),
    #[error(transparent)]
    Drag(#[from] DragError),
}

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

/// What a finished drag did to the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropEffect {
    /// Dropped outside any target; nothing changed.
    Cancelled,
    /// Committed, but there was nothing to change.
    Unchanged,
    /// A section moved to a new free-form position.
    Moved { id: SectionId, position: Point },
    /// A section moved within the document order.
    Reordered { id: SectionId, from: usize, to: usize },
    /// A template became a new section at `index`.
    Inserted { id: SectionId, index: usize },
}

/// Owns the document together with the session state that edits it:
/// the selection, the active drag and pending notifications.
///
/// Every rendering callback (select, update, resize, delete) maps to a
/// method here; collaborators never touch the document directly.
#[derive(Debug, Clone)]
pub struct Editor {
    config: EditorConfig,
    document: ResumeDocument,
    selection: Selection,
    drag: DragSession,
    placement: PlacementEngine,
    notifications: NotificationQueue,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Create an editor with an empty document and default settings.
    pub fn new() -> Self {
        Self::build(EditorConfig::default(), ResumeDocument::new())
    }

    /// Create an editor with an empty document, rejecting invalid settings.
    pub fn with_config(config: EditorConfig) -> Result<Self, ConfigError> {
        Self::with_document(config, ResumeDocument::new())
    }

    pub fn with_document(config: EditorConfig, document: ResumeDocument) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, document))
    }

    fn build(config: EditorConfig, document: ResumeDocument) -> Self {
        Self {
            placement: PlacementEngine::new(&config),
            config,
            document,
            selection: Selection::new(),
            drag: DragSession::new(),
            notifications: NotificationQueue::default(),
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.config.layout_mode
    }

    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }

    pub fn placement(&self) -> &PlacementEngine {
        &self.placement
    }

    pub fn drag_session(&self) -> &DragSession {
        &self.drag
    }

    // --- Selection ---

    pub fn selected(&self) -> Option<SectionId> {
        self.selection.selected()
    }

    pub fn selected_section(&self) -> Option<&Section> {
        self.selection.selected().and_then(|id| self.document.get(id))
    }

    pub fn is_selected(&self, id: SectionId) -> bool {
        self.selection.is_selected(id)
    }

    /// Select a section, or clear the selection with `None`.
    ///
    /// Returns whether the selection changed. Unknown ids are rejected and
    /// leave the selection as it was.
    pub fn select(&mut self, id: Option<SectionId>) -> EditorResult<bool> {
        match id {
            Some(id) if !self.document.contains(id) => {
                log::warn!("Refusing to select unknown section {}", id);
                Err(EditorError::UnknownSection(id))
            }
            Some(id) => Ok(self.selection.select(id)),
            None => Ok(self.selection.clear()),
        }
    }

    // --- Adding and removing sections ---

    /// Add a section of the given type at the next cascade position.
    pub fn add_section(&mut self, section_type: SectionType) -> SectionId {
        self.insert_template(section_type, None).0
    }

    /// Add a section from a sidebar catalogue id.
    ///
    /// Ids that are unknown or name a decorative element are rejected
    /// before the document is touched.
    pub fn add_section_by_id(&mut self, catalog_id: &str) -> EditorResult<SectionId> {
        match catalog::lookup(catalog_id).and_then(|entry| entry.section_type()) {
            Some(section_type) => Ok(self.add_section(section_type)),
            None => {
                self.notifications.push(Notification::error("Invalid section type"));
                Err(EditorError::InvalidSectionType(catalog_id.to_string()))
            }
        }
    }

    /// Create a section from a template, appended or inserted at `index`.
    fn insert_template(&mut self, section_type: SectionType, index: Option<usize>) -> (SectionId, usize) {
        let size = self.config.default_section_size;
        let position = self.placement.insertion_position(self.document.len(), size);
        let index = index.unwrap_or(self.document.len());
        let section = self.document.insert_section(index, section_type, position, size);

        log::info!("Added {} section {}", section_type, section.id());
        self.notifications
            .push(Notification::success(format!("{} section added to resume", section_type.label())));
        (section.id(), index.min(self.document.len() - 1))
    }

    /// Delete a section, clearing the selection if it pointed there.
    pub fn delete_section(&mut self, id: SectionId) -> bool {
        let Some(removed) = self.document.delete_section(id) else {
            return false;
        };
        if self.selection.remove(id) {
            log::debug!("Cleared selection of deleted section {}", id);
        }
        log::info!("Deleted {} section {}", removed.section_type(), id);
        self.notifications.push(Notification::success("Section removed"));
        true
    }

    // --- Pass-through mutations ---

    pub fn update_data(&mut self, id: SectionId, patch: DataPatch) -> bool {
        self.document.update_data(id, patch)
    }

    pub fn update_style(&mut self, id: SectionId, patch: &StylePatch) -> bool {
        self.document.update_style(id, patch)
    }

    pub fn update_size(&mut self, id: SectionId, size: Size) -> bool {
        self.document.update_size(id, size)
    }

    /// Move a section. In free-form layout the position is kept on the canvas.
    pub fn update_position(&mut self, id: SectionId, position: Point) -> bool {
        let Some(section) = self.document.get(id) else {
            return false;
        };
        let position = match self.layout_mode() {
            LayoutMode::FreeForm => self.placement.contain(position, section.size()),
            LayoutMode::Flow => position,
        };
        self.document.update_position(id, position)
    }

    pub fn add_item(&mut self, id: SectionId, field: ListField) -> bool {
        self.document.add_item(id, field)
    }

    pub fn update_item(&mut self, id: SectionId, field: ListField, index: usize, patch: ItemPatch) -> bool {
        self.document.update_item(id, field, index, patch)
    }

    pub fn remove_item(&mut self, id: SectionId, field: ListField, index: usize) -> bool {
        self.document.remove_item(id, field, index)
    }

    /// Replace a skills section's list from comma-separated input.
    pub fn set_skills_from_text(&mut self, id: SectionId, text: &str) -> bool {
        let skills = parse_skill_list(text);
        self.document
            .update_data(id, DataPatch::Skills(SkillsPatch { skills: Some(skills) }))
    }

    // --- Dragging ---

    /// Start dragging a section or a sidebar template.
    pub fn begin_drag(&mut self, source: DragSource, pointer: Point) -> EditorResult<()> {
        let origin = match source {
            DragSource::ExistingSection(id) => match self.document.get(id) {
                Some(section) => Some(section.position()),
                None => {
                    log::warn!("Drag start for unknown section {}", id);
                    return Err(EditorError::UnknownSection(id));
                }
            },
            DragSource::SidebarTemplate(_) => None,
        };
        self.drag.start(source, origin, pointer)?;
        Ok(())
    }

    /// Track pointer movement during a drag.
    pub fn drag_to(&mut self, pointer: Point) -> EditorResult<()> {
        self.drag.update(pointer)?;
        Ok(())
    }

    /// Release the active drag over `target` (or outside any target).
    pub fn end_drag(&mut self, target: Option<DropTarget>, pointer: Point) -> EditorResult<DropEffect> {
        match self.drag.end(target, pointer)? {
            DragOutcome::Cancelled => Ok(DropEffect::Cancelled),
            DragOutcome::Committed(commit) => Ok(self.apply_drop(commit)),
        }
    }

    /// The active pointer was lost; abandon the drag without changes.
    pub fn cancel_drag(&mut self) -> EditorResult<()> {
        self.drag.cancel()?;
        Ok(())
    }

    fn apply_drop(&mut self, commit: DragCommit) -> DropEffect {
        match commit.source {
            DragSource::ExistingSection(id) => {
                let Some(section) = self.document.get(id) else {
                    log::warn!("Dragged section {} no longer exists; dropping nothing", id);
                    return DropEffect::Unchanged;
                };
                match (self.layout_mode(), commit.target) {
                    (LayoutMode::FreeForm, _) => {
                        let origin = commit.origin.unwrap_or(section.position());
                        let position = self.placement.compute_drop_position(origin, commit.delta, section.size());
                        self.document.update_position(id, position);
                        log::debug!("Moved section {} to ({}, {})", id, position.x, position.y);
                        DropEffect::Moved { id, position }
                    }
                    (LayoutMode::Flow, DropTarget::Canvas) => DropEffect::Unchanged,
                    (LayoutMode::Flow, DropTarget::Section(over)) => {
                        match self.placement.reorder_target(&self.document, id, over) {
                            Some((from, to)) if from != to => {
                                self.document.move_section(from, to);
                                log::debug!("Reordered section {} from {} to {}", id, from, to);
                                DropEffect::Reordered { id, from, to }
                            }
                            _ => DropEffect::Unchanged,
                        }
                    }
                }
            }
            DragSource::SidebarTemplate(section_type) => {
                let index = match (self.layout_mode(), commit.target) {
                    (LayoutMode::Flow, DropTarget::Section(over)) => self.document.index_of(over),
                    _ => None,
                };
                let (id, index) = self.insert_template(section_type, index);
                DropEffect::Inserted { id, index }
            }
        }
    }

    // --- Export ---

    /// Deep, point-in-time copy of the document for collaborators.
    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            sections: self.document.sections().to_vec(),
            layout_mode: self.config.layout_mode,
            canvas_size: self.config.canvas_size,
        }
    }

    /// Start an export of the current document.
    ///
    /// Returns `None` for an empty document. The returned future owns its
    /// snapshot, so editing can continue while it runs.
    pub fn begin_export(&mut self, exporter: &dyn Exporter) -> Option<BoxFuture<'static, ExportResult<ExportArtifact>>> {
        if self.document.is_empty() {
            self.notifications.push(Notification::error("Add a section before exporting"));
            return None;
        }
        log::info!("Exporting {} sections", self.document.len());
        Some(exporter.export(self.snapshot()))
    }

    /// Report the outcome of an export started with [`begin_export`](Self::begin_export).
    pub fn finish_export(&mut self, result: &ExportResult<ExportArtifact>) -> bool {
        match result {
            Ok(artifact) => {
                log::info!("Exported {} ({} bytes)", artifact.file_name, artifact.bytes.len());
                self.notifications.push(Notification::success("Resume exported successfully!"));
                true
            }
            Err(e) => {
                log::error!("Export failed: {}", e);
                self.notifications
                    .push(Notification::error("Failed to export resume. Please try again."));
                false
            }
        }
    }

    // --- Notifications ---

    /// Take all pending notifications, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }
}
