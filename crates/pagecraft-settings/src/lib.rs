//! Pagecraft Settings Crate
//!
//! Editor configuration: snapping, history depth and export defaults, stored
//! as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{EditorSettings, ExportDefaults, HistorySettings};
pub use error::{Result, SettingsError};
