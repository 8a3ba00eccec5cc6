// File: crates/report/src/pipeline.rs
// Summary: Orchestrates a run: validate config, then normalize, render and archive each row in order.

use chart_core::{ChartSpec, FontResource, RankChartRenderer, RenderError, RenderOptions};
use tracing::{debug, info};

use crate::archive::ArchiveAssembler;
use crate::config::ReportConfig;
use crate::error::{ConfigError, ReportError};
use crate::record::StudentRecord;
use crate::table::ScoreTable;

/// Turns one chart spec into encoded image bytes.
///
/// The renderer owns the run's single font; `&self` keeps it read-only
/// across rows.
pub trait ChartRenderer {
    fn render(&self, spec: &ChartSpec) -> Result<Vec<u8>, RenderError>;
}

impl ChartRenderer for RankChartRenderer {
    fn render(&self, spec: &ChartSpec) -> Result<Vec<u8>, RenderError> {
        RankChartRenderer::render(self, spec)
    }
}

/// Receives the completed fraction (`rows done / total rows`) after each row.
pub trait Progress {
    fn report(&mut self, fraction: f64);
}

impl<F: FnMut(f64)> Progress for F {
    fn report(&mut self, fraction: f64) {
        self(fraction)
    }
}

/// Discards progress updates.
pub struct Silent;

impl Progress for Silent {
    fn report(&mut self, _fraction: f64) {}
}

/// A finished run. Only produced when every row succeeded.
#[derive(Debug)]
pub struct Report {
    /// Complete ZIP archive bytes.
    pub archive: Vec<u8>,
    /// Rows rendered, one per table row.
    pub rows: usize,
    /// Entry names in archive order; shorter than `rows` when names repeat.
    pub entries: Vec<String>,
}

impl Report {
    /// Rows whose image replaced an earlier entry of the same name.
    pub fn overwritten(&self) -> usize {
        self.rows - self.entries.len()
    }
}

/// Run the whole pipeline over `table`.
///
/// Configuration is checked before any row is touched. After that, any
/// render or archive failure aborts the run and no archive is returned.
pub fn generate_report<R, P>(
    table: &ScoreTable,
    config: &ReportConfig,
    renderer: &R,
    progress: &mut P,
) -> Result<Report, ReportError>
where
    R: ChartRenderer + ?Sized,
    P: Progress + ?Sized,
{
    if config.exam_columns.is_empty() {
        return Err(ConfigError::NoExamColumns.into());
    }
    let name_index = table.require_column(&config.name_column)?;
    let exams = config
        .exam_columns
        .iter()
        .map(|c| Ok((c.clone(), table.require_column(c)?)))
        .collect::<Result<Vec<_>, ConfigError>>()?;
    let upper_bound = u32::try_from(config.y_axis_upper_bound)
        .ok()
        .filter(|&b| b >= 1)
        .ok_or(ConfigError::InvalidUpperBound { value: config.y_axis_upper_bound })?;

    let total = table.len();
    info!(rows = total, exams = exams.len(), upper_bound, "generating rank charts");

    let mut archive = ArchiveAssembler::new();
    for (i, row) in table.rows().enumerate() {
        let record = StudentRecord::from_row(row, name_index, &exams);
        let spec = record.chart_spec(upper_bound, &config.text);
        let image = renderer.render(&spec)?;
        let file_name = record.file_name(&config.text);
        debug!(row = i, student = %record.name, entry = %file_name, bytes = image.len(), "row rendered");
        archive.add(file_name, image);
        progress.report((i + 1) as f64 / total as f64);
    }

    let entries = archive.names().map(str::to_string).collect::<Vec<_>>();
    let bytes = archive.finish()?;
    info!(rows = total, entries = entries.len(), bytes = bytes.len(), "archive finalized");
    Ok(Report { archive: bytes, rows: total, entries })
}

/// Convenience wrapper binding `font` into the Skia renderer for one run.
pub fn generate_report_with_font<P: Progress + ?Sized>(
    table: &ScoreTable,
    config: &ReportConfig,
    font: FontResource,
    options: RenderOptions,
    progress: &mut P,
) -> Result<Report, ReportError> {
    let renderer = RankChartRenderer::with_options(font, options);
    generate_report(table, config, &renderer, progress)
}
