//! Configuration and settings management for FigureKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Editor defaults (colour, stroke, font, undo depth)
//! - Storage (account and document backend)
//! - Logging (level and output format)

use crate::error::{SettingsError, SettingsResult};
use figurekit_core::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "figurekit";
const CONFIG_FILE: &str = "config.toml";

/// Defaults applied to newly created figures and to the editor itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Outline width of new figures
    pub line_thickness: f64,
    /// Dash pattern of new figures; empty for solid
    pub line_style: Vec<f64>,
    /// Whether new closed figures are filled
    pub fill: bool,
    /// CSS font size of new text figures
    pub font_size: String,
    /// CSS font family of new text figures
    pub font_family: String,
    /// Pointer presses at or above this height are ignored
    pub menu_bar_height: f64,
    /// Maximum number of undoable edits
    pub undo_depth: usize,
    /// Colour of new figures
    pub default_color: Color,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            line_thickness: 5.0,
            line_style: vec![5.0, 15.0],
            fill: false,
            font_size: "48px".to_string(),
            font_family: "serif".to_string(),
            menu_bar_height: 0.0,
            undo_depth: 100,
            default_color: Color::BLACK,
        }
    }
}

/// Document backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local store, lost on exit
    #[default]
    Memory,
    /// One JSON file per drawing under the storage directory
    File,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::File => write!(f, "file"),
        }
    }
}

/// Where drawings are saved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Account drawings are stored under
    pub account: String,
    pub backend: StorageBackend,
    /// Root directory of the file backend
    pub directory: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            account: "guest".to_string(),
            backend: StorageBackend::default(),
            directory: dirs::data_dir()
                .map(|dir| dir.join(APP_DIR).join("drawings"))
                .unwrap_or_else(|| PathBuf::from("drawings")),
        }
    }
}

/// Logging output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive, e.g. `info` or `figurekit_designer=debug`
    pub level: String,
    /// Emit JSON lines instead of pretty text
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub editor: EditorSettings,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or_default().to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config file location, e.g. `~/.config/figurekit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Load config from file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let editor = &self.editor;
        if !(editor.line_thickness.is_finite() && editor.line_thickness > 0.0) {
            return Err(SettingsError::invalid("editor.line_thickness", "must be > 0"));
        }

        if editor
            .line_style
            .iter()
            .any(|dash| !dash.is_finite() || *dash < 0.0)
        {
            return Err(SettingsError::invalid(
                "editor.line_style",
                "dash lengths must be >= 0",
            ));
        }

        if editor.font_size.trim().is_empty() {
            return Err(SettingsError::invalid("editor.font_size", "must not be empty"));
        }

        if editor.font_family.trim().is_empty() {
            return Err(SettingsError::invalid("editor.font_family", "must not be empty"));
        }

        if !(editor.menu_bar_height.is_finite() && editor.menu_bar_height >= 0.0) {
            return Err(SettingsError::invalid("editor.menu_bar_height", "must be >= 0"));
        }

        if editor.undo_depth == 0 {
            return Err(SettingsError::invalid("editor.undo_depth", "must be > 0"));
        }

        if self.storage.account.is_empty() {
            return Err(SettingsError::invalid("storage.account", "must not be empty"));
        }

        if self.storage.backend == StorageBackend::File
            && self.storage.directory.as_os_str().is_empty()
        {
            return Err(SettingsError::invalid(
                "storage.directory",
                "required by the file backend",
            ));
        }

        if self.logging.level.trim().is_empty() {
            return Err(SettingsError::invalid("logging.level", "must not be empty"));
        }

        Ok(())
    }
}
