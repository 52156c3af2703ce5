//! Engine-wide defaults.

/// Default number of retained history snapshots.
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// Default distance (in canvas pixels) within which an element snaps to a guide line.
pub const DEFAULT_SNAP_THRESHOLD_PX: f64 = 5.0;

/// Default page width for new documents, in pixels.
pub const DEFAULT_PAGE_WIDTH: u32 = 1080;

/// Default page height for new documents, in pixels.
pub const DEFAULT_PAGE_HEIGHT: u32 = 1080;

/// Default page background colour.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";

/// Export scale multipliers accepted by the exporter.
pub const EXPORT_SCALES: [u32; 3] = [1, 2, 3];

/// Lowest accepted quality for lossy export.
pub const MIN_LOSSY_QUALITY: u8 = 60;

/// Highest accepted quality for lossy export.
pub const MAX_LOSSY_QUALITY: u8 = 100;

/// Default quality used for lossy export when none is configured.
pub const DEFAULT_LOSSY_QUALITY: u8 = 92;

/// Tolerance used when comparing derived floating point coordinates.
pub const GEOMETRY_EPSILON: f64 = 1e-6;
