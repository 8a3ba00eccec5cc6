// File: crates/report/src/lib.rs
// Summary: Report library entry point; turns a score table into a ZIP of per-student rank charts.

pub mod archive;
pub mod config;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod record;
pub mod table;

pub use archive::ArchiveAssembler;
pub use config::{ChartText, ReportConfig};
pub use error::{ArchiveError, ConfigError, ErrorKind, ReportError, TableError};
pub use normalize::normalize;
pub use pipeline::{generate_report, generate_report_with_font, ChartRenderer, Progress, Report, Silent};
pub use record::{ExamScore, StudentRecord};
pub use table::{Cell, ScoreTable};
