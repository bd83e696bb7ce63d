//! Resumink Core Library
//!
//! Platform-agnostic document model and interaction state for the Resumink
//! resume editor: sections, placement, selection and drag sessions.

pub mod catalog;
pub mod config;
pub mod document;
pub mod drag;
pub mod editor;
pub mod export;
pub mod notify;
pub mod placement;
pub mod section;
pub mod selection;

pub use catalog::{CATALOG, CatalogEntry, CatalogKind};
pub use config::{ConfigError, EditorConfig, LayoutMode};
pub use document::{DuplicateSectionId, ResumeDocument};
pub use drag::{DragError, DragOutcome, DragSession, DragSource, DropTarget};
pub use editor::{DropEffect, Editor, EditorError, EditorResult};
pub use export::{BoxFuture, DocumentSnapshot, ExportArtifact, ExportError, ExportResult, Exporter};
pub use notify::{Notification, NotificationLevel};
pub use placement::{GRID_SIZE, PlacementEngine, snap_to_grid};
pub use section::{Section, SectionData, SectionId, SectionStyle, SectionType};
pub use selection::Selection;
