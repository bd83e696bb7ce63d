//! Resumink Export Library
//!
//! Renders document snapshots into a standalone HTML page.

pub mod html;

use resumink_core::export::{BoxFuture, DocumentSnapshot, ExportArtifact, ExportError, ExportResult, Exporter};

pub use html::{escape_html, render_document};

/// Default name of the exported file.
pub const DEFAULT_FILE_NAME: &str = "resume.html";

/// Exports a snapshot as a single HTML file.
#[derive(Debug, Clone)]
pub struct HtmlExporter {
    file_name: String,
}

impl Default for HtmlExporter {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_NAME)
    }
}

impl HtmlExporter {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self { file_name: file_name.into() }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl Exporter for HtmlExporter {
    fn export(&self, snapshot: DocumentSnapshot) -> BoxFuture<'static, ExportResult<ExportArtifact>> {
        let file_name = self.file_name.clone();
        Box::pin(async move {
            if snapshot.is_empty() {
                return Err(ExportError::EmptyDocument);
            }
            let html = render_document(&snapshot);
            log::debug!("Rendered {} sections into {} bytes of HTML", snapshot.sections.len(), html.len());
            Ok(ExportArtifact {
                file_name,
                mime_type: "text/html".to_string(),
                bytes: html.into_bytes(),
            })
        })
    }
}
