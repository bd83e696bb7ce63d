//! Export abstraction.
//!
//! The editor hands an owned snapshot to an [`Exporter`] and gets back a
//! future; the host drives the future and reports the result back through
//! `Editor::finish_export`.

use crate::config::LayoutMode;
use crate::section::Section;
use kurbo::Size;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Nothing to export: the document is empty")]
    EmptyDocument,
    #[error("Render error: {0}")]
    Render(String),
    #[error("IO error: {0}")]
    Io(String),
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Boxed future for async operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// A point-in-time, read-only copy of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSnapshot {
    pub sections: Vec<Section>,
    pub layout_mode: LayoutMode,
    pub canvas_size: Size,
}

impl DocumentSnapshot {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// A generated, downloadable document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Trait for export backends.
///
/// The returned future must not borrow the exporter or the editor, so the
/// document stays editable while an export runs.
pub trait Exporter {
    fn export(&self, snapshot: DocumentSnapshot) -> BoxFuture<'static, ExportResult<ExportArtifact>>;
}
