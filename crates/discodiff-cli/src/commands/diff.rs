//! Diff command
//!
//! Usage: discodiff diff <OLD> <NEW> [--config <FILE>] [--format text|json] [--output <FILE>]

use clap::{Args, ValueEnum};
use std::path::PathBuf;

use discodiff_core::errors::DiffError;
use discodiff_core::logging_facility;
use discodiff_core::{compare_documents, load_document, render_diff, DiffEntry, DiffOptions};

use super::Outcome;
use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Indented text, one line per entry
    Text,
    /// The diff tree as pretty-printed JSON
    Json,
}

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Older discovery document
    pub old: PathBuf,

    /// Newer discovery document
    pub new: PathBuf,

    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable every category, ignoring the config file
    #[arg(long)]
    pub all: bool,

    /// Skip Version and Revision
    #[arg(long)]
    pub no_versioning: bool,

    /// Skip Description fields
    #[arg(long)]
    pub no_descriptions: bool,

    /// Skip service metadata (Title, RootURL, ...)
    #[arg(long)]
    pub no_service: bool,

    /// Skip the schemas collection
    #[arg(long)]
    pub no_schemas: bool,

    /// Skip the resources collection
    #[arg(long)]
    pub no_resources: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Exit with status 2 when the documents differ
    #[arg(long)]
    pub fail_on_change: bool,
}

impl DiffArgs {
    /// Apply command-line flags on top of the config file's mask
    fn resolve_options(&self, config: &Config) -> DiffOptions {
        let base = if self.all {
            DiffOptions::all()
        } else {
            config.options
        };
        DiffOptions {
            versioning: base.versioning && !self.no_versioning,
            descriptions: base.descriptions && !self.no_descriptions,
            service: base.service && !self.no_service,
            schemas: base.schemas && !self.no_schemas,
            resources: base.resources && !self.no_resources,
        }
    }
}

/// Execute diff command
pub fn execute(args: DiffArgs) -> Result<Outcome, Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    logging_facility::init(config.log_profile);

    let options = args.resolve_options(&config);
    tracing::debug!(?options, "resolved diff options");

    let old = load_document(&args.old)?;
    let new = load_document(&args.new)?;
    let entries = compare_documents(&old, &new, &options)?;

    let rendered = format_entries(&entries, args.format)?;
    if let Some(output_path) = &args.output {
        std::fs::write(output_path, rendered).map_err(|e| DiffError::Io {
            path: output_path.display().to_string(),
            reason: e.to_string(),
        })?;
        println!("✓ Wrote {} entries to {}", entries.len(), output_path.display());
    } else {
        print!("{}", rendered);
    }

    if args.fail_on_change && !entries.is_empty() {
        Ok(Outcome::ChangesFound)
    } else {
        Ok(Outcome::Success)
    }
}

fn format_entries(entries: &[DiffEntry], format: Format) -> Result<String, DiffError> {
    match format {
        Format::Text => Ok(render_diff(entries)),
        Format::Json => serde_json::to_string_pretty(entries)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| DiffError::Serialization {
                reason: e.to_string(),
            }),
    }
}
