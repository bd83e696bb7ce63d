//! Resumink App Library
//!
//! Native shell around the core editor: loads settings, replays a scripted
//! editing session and writes the exported resume to disk.

pub mod session;

use resumink_core::{ConfigError, Editor, EditorConfig, EditorError, ExportError};
use resumink_export::HtmlExporter;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
    #[error("Nothing to export")]
    NothingToExport,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for app operations.
pub type AppResult<T> = Result<T, AppError>;

/// Load settings from `path`, or fall back to the defaults.
pub fn load_config(path: Option<&Path>) -> AppResult<EditorConfig> {
    match path {
        Some(path) => {
            log::info!("Loading config from {}", path.display());
            Ok(EditorConfig::load(path)?)
        }
        None => Ok(EditorConfig::default()),
    }
}

/// Export the editor's document and write it to `output`.
///
/// Notifications raised along the way are logged and discarded.
pub fn export_to(editor: &mut Editor, exporter: &HtmlExporter, output: &Path) -> AppResult<PathBuf> {
    let Some(future) = editor.begin_export(exporter) else {
        session::log_notifications(editor);
        return Err(AppError::NothingToExport);
    };
    let result = pollster::block_on(future);
    editor.finish_export(&result);
    session::log_notifications(editor);

    let artifact = result?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, &artifact.bytes)?;
    log::info!("Wrote {} ({} bytes)", output.display(), artifact.bytes.len());
    Ok(output.to_path_buf())
}

/// Run a full session: load config, build the sample resume, export it.
pub fn run(config_path: Option<&Path>, output: &Path) -> AppResult<PathBuf> {
    let config = load_config(config_path)?;
    log::info!("Layout mode: {:?}", config.layout_mode);

    let mut editor = Editor::with_config(config)?;
    session::build_sample_resume(&mut editor)?;

    let file_name = output
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(resumink_export::DEFAULT_FILE_NAME);
    let exporter = HtmlExporter::new(file_name);
    export_to(&mut editor, &exporter, output)
}
