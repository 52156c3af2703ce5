//! Command-line interface for the `pagecraft` binary.
//!
//! `export-plan` loads a document snapshot, applies the export defaults from
//! the settings file, overrides them with any flags and reports either the
//! per-page plan or every violation of the request.

use anyhow::Context;
use clap::{Parser, Subcommand};
use pagecraft_designer::{
    plan_export, Document, ExportConfig, ExportConfigError, ExportFormat, PageExport,
};
use pagecraft_settings::EditorSettings;
use std::path::{Path, PathBuf};

/// Multi-page poster composition tools
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate an export request against a document and list the output files
    ExportPlan(ExportPlanArgs),
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct ExportPlanArgs {
    /// Path to the document snapshot (JSON)
    pub document: PathBuf,

    /// Settings file (JSON or TOML); defaults to the user settings if present
    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    /// Output format (lossless/png or lossy/jpeg)
    #[arg(short, long)]
    pub format: Option<ExportFormat>,

    /// Lossy quality (60-100)
    #[arg(short, long)]
    pub quality: Option<u32>,

    /// Pixel multiplier (1, 2 or 3)
    #[arg(long)]
    pub scale: Option<u32>,

    /// Zero-based page indices; all pages when omitted
    #[arg(short, long, value_delimiter = ',')]
    pub pages: Vec<usize>,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

/// Outcome of an `export-plan` run.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    Planned(Vec<PageExport>),
    Rejected(Vec<ExportConfigError>),
}

impl PlanOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, PlanOutcome::Rejected(_))
    }
}

/// Reads a document snapshot from disk.
pub fn load_document(path: &Path) -> anyhow::Result<Document> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read document {}", path.display()))?;
    let document: Document = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse document {}", path.display()))?;
    tracing::debug!(
        "Loaded {} with {} page(s)",
        path.display(),
        document.page_count()
    );
    Ok(document)
}

fn load_settings(path: Option<&Path>) -> anyhow::Result<EditorSettings> {
    match path {
        Some(path) => EditorSettings::load_from_file(path)
            .with_context(|| format!("failed to load settings {}", path.display())),
        None => match EditorSettings::default_path() {
            Ok(path) => EditorSettings::load_or_default(&path)
                .with_context(|| format!("failed to load settings {}", path.display())),
            Err(err) => {
                tracing::debug!("Using default settings: {err}");
                Ok(EditorSettings::default())
            }
        },
    }
}

/// Merges the settings defaults with command-line overrides.
pub fn resolve_config(
    settings: &EditorSettings,
    args: &ExportPlanArgs,
    page_count: usize,
) -> ExportConfig {
    let pages = if args.pages.is_empty() {
        (0..page_count).collect()
    } else {
        args.pages.clone()
    };

    let mut config = settings.export.to_config(pages);
    if let Some(format) = args.format {
        config.format = format;
        if format == ExportFormat::Lossy && config.quality.is_none() {
            config.quality = Some(settings.export.quality);
        }
    }
    if let Some(quality) = args.quality {
        config.quality = Some(quality);
    }
    if let Some(scale) = args.scale {
        config.scale = scale;
    }
    config
}

/// Runs `export-plan` without printing anything.
pub fn export_plan(args: &ExportPlanArgs) -> anyhow::Result<PlanOutcome> {
    let settings = load_settings(args.settings.as_deref())?;
    let document = load_document(&args.document)?;
    let config = resolve_config(&settings, args, document.page_count());
    tracing::debug!(?config, "Resolved export request");

    Ok(match plan_export(&document, &config) {
        Ok(plan) => PlanOutcome::Planned(plan),
        Err(errors) => PlanOutcome::Rejected(errors),
    })
}

/// Renders an outcome for the terminal.
pub fn render(outcome: &PlanOutcome, json: bool) -> anyhow::Result<String> {
    let mut out = String::new();
    match outcome {
        PlanOutcome::Planned(plan) if json => {
            out = serde_json::to_string_pretty(plan).context("failed to encode plan")?;
        }
        PlanOutcome::Planned(plan) => {
            for page in plan {
                out.push_str(&format!(
                    "{}\t{}x{}\t{}\n",
                    page.page_index, page.size.width, page.size.height, page.file_name
                ));
            }
        }
        PlanOutcome::Rejected(errors) => {
            for error in errors {
                out.push_str(&format!("error: {error}\n"));
            }
        }
    }
    Ok(out)
}

/// Dispatches a parsed command line. Returns `false` when the request was rejected.
pub fn run(args: &Args) -> anyhow::Result<bool> {
    match &args.command {
        Command::ExportPlan(plan_args) => {
            let outcome = export_plan(plan_args)?;
            let text = render(&outcome, plan_args.json)?;
            if outcome.is_rejected() {
                eprint!("{text}");
            } else {
                println!("{}", text.trim_end());
            }
            Ok(!outcome.is_rejected())
        }
    }
}
