//! Editor settings and their file I/O.

use crate::error::{Result, SettingsError};
use pagecraft_core::constants::{DEFAULT_LOSSY_QUALITY, DEFAULT_MAX_HISTORY};
use pagecraft_designer::{AlignmentConfig, DesignerState, Document, ExportConfig, ExportFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Undo history settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of retained snapshots
    pub max_history: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_history: DEFAULT_MAX_HISTORY,
        }
    }
}

/// Defaults pre-filled into the export dialog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportDefaults {
    pub format: ExportFormat,
    /// Quality used when exporting lossy
    pub quality: u32,
    pub scale: u32,
}

impl Default for ExportDefaults {
    fn default() -> Self {
        Self {
            format: ExportFormat::Lossless,
            quality: u32::from(DEFAULT_LOSSY_QUALITY),
            scale: 1,
        }
    }
}

impl ExportDefaults {
    /// Builds an export request for `page_indices` from these defaults.
    pub fn to_config(&self, page_indices: Vec<usize>) -> ExportConfig {
        ExportConfig {
            format: self.format,
            quality: match self.format {
                ExportFormat::Lossy => Some(self.quality),
                ExportFormat::Lossless => None,
            },
            scale: self.scale,
            page_indices,
        }
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Snapping and guides
    pub alignment: AlignmentConfig,
    /// Undo history
    pub history: HistorySettings,
    /// Export dialog defaults
    pub export: ExportDefaults,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Result<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        _ => Err(SettingsError::UnsupportedFormat(
            path.display().to_string(),
        )),
    }
}

impl EditorSettings {
    /// Create new settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default settings file location under the platform config directory.
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| SettingsError::ConfigDirectory("no config or home directory".into()))?;
        Ok(base.join("pagecraft").join("settings.toml"))
    }

    /// Load settings from file (JSON or TOML, by extension)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let settings: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        settings.validate()?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No settings at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save settings to file (JSON or TOML, by extension)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let format = format_of(path)?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        tracing::debug!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Validate settings
    pub fn validate(&self) -> Result<()> {
        let threshold = self.alignment.snap_threshold_px;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(SettingsError::invalid(
                "alignment.snap_threshold_px",
                format!("must be a finite number >= 0, got {threshold}"),
            ));
        }

        if self.history.max_history == 0 {
            return Err(SettingsError::invalid("history.max_history", "must be >= 1"));
        }

        let violations = self.export.to_config(vec![0]).validate();
        if !violations.is_empty() {
            let reasons: Vec<String> = violations.iter().map(ToString::to_string).collect();
            return Err(SettingsError::invalid("export", reasons.join("; ")));
        }

        Ok(())
    }

    /// Opens `document` in a designer session configured by these settings.
    pub fn open_document(&self, document: Document) -> pagecraft_core::Result<DesignerState> {
        DesignerState::from_document(
            document,
            self.alignment.clone(),
            self.history.max_history,
        )
    }
}
