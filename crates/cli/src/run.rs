// File: crates/cli/src/run.rs
// Summary: Drives one report run from parsed arguments and writes the archive to disk.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{theme, FontResource, RenderError, RenderOptions};
use rank_report::config::{default_exam_columns, default_name_column};
use rank_report::{generate_report_with_font, ConfigError, ErrorKind, Progress, ReportConfig, ReportError, ScoreTable};
use tracing::info;

use crate::cli::Cli;
use crate::fonts;

/// Logs progress at every tenth of the run, plus the final row.
pub struct ProgressLog {
    last_decile: u32,
}

impl ProgressLog {
    pub fn new() -> Self {
        Self { last_decile: 0 }
    }
}

impl Default for ProgressLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for ProgressLog {
    fn report(&mut self, fraction: f64) {
        let decile = (fraction * 10.0).floor() as u32;
        if decile > self.last_decile || fraction >= 1.0 {
            self.last_decile = decile;
            info!(percent = %format!("{:.0}", fraction * 100.0), "progress");
        }
    }
}

/// Column choice from the flags, falling back to the table's defaults.
pub fn report_config(args: &Cli, table: &ScoreTable) -> Result<ReportConfig, ConfigError> {
    let name_column = match &args.name_column {
        Some(name) => name.clone(),
        None => default_name_column(table.headers())
            .ok_or(ConfigError::UnknownColumn { column: "<name>".to_string() })?
            .to_string(),
    };
    let exam_columns = if args.exams.is_empty() {
        default_exam_columns(table.headers(), &name_column)
    } else {
        args.exams.clone()
    };
    Ok(ReportConfig::new(name_column, exam_columns, args.population))
}

/// Load inputs, render every student and write the ZIP. Returns the archive path.
pub fn run(args: &Cli) -> Result<PathBuf> {
    let table = ScoreTable::from_csv_path(&args.input)
        .map_err(ReportError::from)
        .with_context(|| format!("loading scores from '{}'", args.input.display()))?;
    info!(rows = table.len(), columns = table.headers().len(), "score table loaded");

    let font_path = fonts::resolve(args.font.as_deref(), &args.font_dir).map_err(ReportError::from)?;
    let font = load_font(&font_path)?;

    let config = report_config(args, &table).map_err(ReportError::from)?;
    info!(name_column = %config.name_column, exams = ?config.exam_columns, "columns selected");

    let options = RenderOptions { theme: theme::find(&args.theme), ..RenderOptions::default() };
    let mut progress = ProgressLog::new();
    let report = generate_report_with_font(&table, &config, font, options, &mut progress)?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("creating '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &report.archive)
        .with_context(|| format!("writing archive '{}'", args.out.display()))?;

    if report.overwritten() > 0 {
        info!(overwritten = report.overwritten(), "some students share a name; later rows replaced earlier charts");
    }
    info!(
        font = %font_path.display(),
        charts = report.entries.len(),
        archive = %args.out.display(),
        "report generated"
    );
    Ok(args.out.clone())
}

/// Load the run's font. A file that does not exist is a configuration
/// problem like a missing table; any other failure is a render error.
pub fn load_font(path: &Path) -> Result<FontResource, ReportError> {
    match FontResource::from_file(path) {
        Ok(font) => Ok(font),
        Err(RenderError::FontRead { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            Err(ConfigError::MissingFont { reason: format!("font file '{}' does not exist", path.display()) }.into())
        }
        Err(err) => Err(err.into()),
    }
}

/// Exit status for a failed run: 2 for configuration problems, 1 otherwise.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    let kind = err
        .chain()
        .find_map(|e| e.downcast_ref::<ReportError>())
        .map(ReportError::kind);
    match kind {
        Some(ErrorKind::Configuration) => 2,
        _ => 1,
    }
}
