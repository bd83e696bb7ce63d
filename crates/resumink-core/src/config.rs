//! Editor configuration.

use crate::placement::{CASCADE_ORIGIN, CASCADE_STEP, GRID_SIZE};
use crate::section::DEFAULT_SECTION_SIZE;
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default canvas extent: a US letter page at 96 dpi.
pub const DEFAULT_CANVAS_SIZE: Size = Size::new(816.0, 1056.0);

/// How sections are laid out on the canvas. Fixed for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    /// Sections carry independent `{x, y}` coordinates, snapped to the grid.
    #[default]
    FreeForm,
    /// Sections stack in document order; dragging reorders.
    Flow,
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Editor settings. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    pub layout_mode: LayoutMode,
    /// Grid unit for free-form snapping.
    pub grid_size: f64,
    pub canvas_size: Size,
    /// Position of the first inserted section.
    pub cascade_origin: Point,
    /// Vertical offset between consecutive inserted sections.
    pub cascade_step: f64,
    pub default_section_size: Size,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            layout_mode: LayoutMode::default(),
            grid_size: GRID_SIZE,
            canvas_size: DEFAULT_CANVAS_SIZE,
            cascade_origin: CASCADE_ORIGIN,
            cascade_step: CASCADE_STEP,
            default_section_size: DEFAULT_SECTION_SIZE,
        }
    }
}

impl EditorConfig {
    /// Default settings in the given layout mode.
    pub fn with_layout(layout_mode: LayoutMode) -> Self {
        Self { layout_mode, ..Self::default() }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Check that grid, canvas and cascade values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.grid_size.is_finite() && self.grid_size > 0.0) {
            return Err(ConfigError::Parse(format!("gridSize must be positive, got {}", self.grid_size)));
        }
        if !(self.canvas_size.width.is_finite()
            && self.canvas_size.height.is_finite()
            && self.canvas_size.width > 0.0
            && self.canvas_size.height > 0.0)
        {
            return Err(ConfigError::Parse("canvasSize must be positive".to_string()));
        }
        if !self.cascade_step.is_finite() || self.cascade_step < 0.0 {
            return Err(ConfigError::Parse("cascadeStep must not be negative".to_string()));
        }
        Ok(())
    }
}
