//! Export sizing and validation.
//!
//! Rasterizing is done elsewhere; this module decides what would be exported
//! and whether the request is acceptable. Validation collects every violated
//! constraint instead of stopping at the first one.

use crate::model::{Document, PageId};
use pagecraft_core::constants::{
    DEFAULT_LOSSY_QUALITY, EXPORT_SCALES, MAX_LOSSY_QUALITY, MIN_LOSSY_QUALITY,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A violated export constraint. `Display` gives the message shown to users.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportConfigError {
    /// Lossy export was requested without a quality
    #[error("quality is required for lossy export")]
    QualityRequired,

    /// Lossy quality outside the accepted range
    #[error("quality must be 60–100")]
    QualityOutOfRange {
        /// The rejected quality.
        quality: u32,
    },

    /// Scale is not one of the supported multipliers
    #[error("scale must be 1, 2, or 3")]
    InvalidScale {
        /// The rejected scale.
        scale: u32,
    },

    /// No page was selected for export
    #[error("at least one page must be selected")]
    NoPagesSelected,

    /// The format name is not recognized
    #[error("format must be lossless or lossy, got '{format}'")]
    UnknownFormat {
        /// The rejected format name.
        format: String,
    },

    /// A selected page does not exist
    #[error("page {index} does not exist (pages: {total})")]
    PageIndexOutOfRange {
        /// The rejected page index.
        index: usize,
        /// The number of pages in the document.
        total: usize,
    },

    /// A page has a zero dimension
    #[error("page size must be positive, got {width}x{height}")]
    InvalidPageSize {
        /// Page width in pixels.
        width: u32,
        /// Page height in pixels.
        height: u32,
    },

    /// The scaled size does not fit in 32 bits
    #[error("export size overflows at scale {scale}")]
    SizeOverflow {
        /// The requested scale.
        scale: u32,
    },
}

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// PNG.
    #[default]
    #[serde(alias = "png")]
    Lossless,
    /// JPEG.
    #[serde(alias = "jpeg", alias = "jpg")]
    Lossy,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Lossless => "png",
            ExportFormat::Lossy => "jpg",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Lossless => "image/png",
            ExportFormat::Lossy => "image/jpeg",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Lossless => write!(f, "lossless"),
            ExportFormat::Lossy => write!(f, "lossy"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lossless" | "png" => Ok(ExportFormat::Lossless),
            "lossy" | "jpeg" | "jpg" => Ok(ExportFormat::Lossy),
            other => Err(ExportConfigError::UnknownFormat {
                format: other.to_string(),
            }),
        }
    }
}

/// An export request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub format: ExportFormat,
    /// Lossy quality; ignored for lossless output.
    pub quality: Option<u32>,
    /// Pixel multiplier, one of 1, 2 or 3.
    pub scale: u32,
    /// Pages to export.
    pub page_indices: Vec<usize>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::Lossless,
            quality: None,
            scale: 1,
            page_indices: vec![0],
        }
    }
}

impl ExportConfig {
    /// A lossy request at the default quality.
    pub fn lossy(page_indices: Vec<usize>) -> Self {
        Self {
            format: ExportFormat::Lossy,
            quality: Some(u32::from(DEFAULT_LOSSY_QUALITY)),
            page_indices,
            ..Self::default()
        }
    }

    /// Every violated constraint; empty when the request is valid.
    pub fn validate(&self) -> Vec<ExportConfigError> {
        validate_config(self)
    }
}

/// Output size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExportSize {
    pub width: u32,
    pub height: u32,
}

fn check_scale(scale: u32) -> Result<(), ExportConfigError> {
    if EXPORT_SCALES.contains(&scale) {
        Ok(())
    } else {
        Err(ExportConfigError::InvalidScale { scale })
    }
}

/// Size of a `width` x `height` page exported at `scale`.
pub fn compute_export_size(
    width: u32,
    height: u32,
    scale: u32,
) -> Result<ExportSize, ExportConfigError> {
    check_scale(scale)?;
    if width == 0 || height == 0 {
        return Err(ExportConfigError::InvalidPageSize { width, height });
    }
    match (width.checked_mul(scale), height.checked_mul(scale)) {
        (Some(width), Some(height)) => Ok(ExportSize { width, height }),
        _ => Err(ExportConfigError::SizeOverflow { scale }),
    }
}

/// Checks format, quality, scale and page selection, reporting every violation.
pub fn validate_config(config: &ExportConfig) -> Vec<ExportConfigError> {
    let mut errors = Vec::new();

    if config.format == ExportFormat::Lossy {
        match config.quality {
            None => errors.push(ExportConfigError::QualityRequired),
            Some(quality)
                if quality < u32::from(MIN_LOSSY_QUALITY)
                    || quality > u32::from(MAX_LOSSY_QUALITY) =>
            {
                errors.push(ExportConfigError::QualityOutOfRange { quality })
            }
            Some(_) => {}
        }
    }

    if let Err(err) = check_scale(config.scale) {
        errors.push(err);
    }

    if config.page_indices.is_empty() {
        errors.push(ExportConfigError::NoPagesSelected);
    }

    errors
}

/// Page indices split by whether they address an existing page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageIndexPartition {
    pub valid: Vec<usize>,
    pub invalid: Vec<usize>,
}

impl PageIndexPartition {
    /// One error per invalid index.
    pub fn errors(&self, total_pages: usize) -> Vec<ExportConfigError> {
        self.invalid
            .iter()
            .map(|&index| ExportConfigError::PageIndexOutOfRange {
                index,
                total: total_pages,
            })
            .collect()
    }
}

/// Partitions `indices` into those below `total_pages` and the rest.
pub fn validate_page_indices(indices: &[usize], total_pages: usize) -> PageIndexPartition {
    let (valid, invalid): (Vec<usize>, Vec<usize>) =
        indices.iter().partition(|&&i| i < total_pages);
    PageIndexPartition { valid, invalid }
}

/// One page of a validated export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageExport {
    pub page_index: usize,
    pub page_id: PageId,
    pub size: ExportSize,
    pub format: ExportFormat,
    pub quality: Option<u32>,
    pub file_name: String,
}

/// Lowercase, dash-separated form of a page name for file names.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "page".to_string()
    } else {
        slug.to_string()
    }
}

/// Validates `config` against `document` and lists what each page exports to.
///
/// Returns every violation when anything is wrong: configuration problems,
/// out-of-range page indices and pages that cannot be sized.
pub fn plan_export(
    document: &Document,
    config: &ExportConfig,
) -> Result<Vec<PageExport>, Vec<ExportConfigError>> {
    let mut errors = validate_config(config);
    let partition = validate_page_indices(&config.page_indices, document.page_count());
    errors.extend(partition.errors(document.page_count()));

    let quality = match config.format {
        ExportFormat::Lossy => config.quality,
        ExportFormat::Lossless => None,
    };

    let mut plan = Vec::with_capacity(partition.valid.len());
    for &index in &partition.valid {
        let Some(page) = document.page(index) else {
            continue;
        };
        // Scale errors are already reported by validate_config.
        if EXPORT_SCALES.contains(&config.scale) {
            match compute_export_size(page.width, page.height, config.scale) {
                Ok(size) => plan.push(PageExport {
                    page_index: index,
                    page_id: page.id.clone(),
                    size,
                    format: config.format,
                    quality,
                    file_name: format!(
                        "{}-{}.{}",
                        slugify(&page.name),
                        index + 1,
                        config.format.extension()
                    ),
                }),
                Err(err) => errors.push(err),
            }
        }
    }

    if errors.is_empty() {
        tracing::debug!(
            pages = plan.len(),
            format = %config.format,
            scale = config.scale,
            "export planned"
        );
        Ok(plan)
    } else {
        tracing::debug!(violations = errors.len(), "export request rejected");
        Err(errors)
    }
}
