//! # Pagecraft
//!
//! An editing engine for multi-page poster and graphic compositions:
//! - Layered pages with z-order, grouping and per-layer visibility/lock
//! - Move, scale and rotate arithmetic with validated transforms
//! - Snap guides to the canvas center and sibling edges/centers
//! - Bounded undo/redo over whole-document snapshots
//! - Export sizing and request validation
//!
//! ## Architecture
//!
//! Pagecraft is organized as a workspace with multiple crates:
//!
//! 1. **pagecraft-core** - Error taxonomy, `Result` alias and engine constants
//! 2. **pagecraft-designer** - The document model and every editing operation
//! 3. **pagecraft-settings** - Editor settings loaded from JSON or TOML
//! 4. **pagecraft** - Re-exports, logging setup and the `pagecraft` binary

pub mod cli;

pub use pagecraft_core::{constants, DesignerError, Result};

pub use pagecraft_designer::{
    align_elements, calculate_snap, compute_export_size, distribute_elements, plan_export,
    AlignDirection, AlignmentConfig, AlignmentLine, Bounds, DesignerState, DistributeDirection,
    Document, ExportConfig, ExportConfigError, ExportFormat, ExportSize, History, Layer, LayerType,
    Page, PageExport, SelectionManager, SnapResult, Transform,
};

pub use pagecraft_settings::{EditorSettings, ExportDefaults, HistorySettings, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, keeping stdout for command output
/// - RUST_LOG environment variable support
/// - INFO as the default level
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
