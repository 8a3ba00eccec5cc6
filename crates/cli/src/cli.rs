// File: crates/cli/src/cli.rs
// Summary: Command-line arguments (clap derive).

use std::path::PathBuf;

use clap::Parser;
use rank_report::config::DEFAULT_UPPER_BOUND;

#[derive(Debug, Parser)]
#[command(name = "rank-trend", version, about = "Render one rank-trend chart per student and bundle them into a ZIP")]
pub struct Cli {
    /// Score table (CSV with a header row).
    pub input: PathBuf,

    /// Font file (.ttf/.otf) covering the script used in names and captions.
    #[arg(long)]
    pub font: Option<PathBuf>,

    #[arg(long, default_value = ".", help = "Directory searched for .ttf/.otf files when --font is not given")]
    pub font_dir: PathBuf,

    #[arg(long, help = "Column holding student names (default: second column)")]
    pub name_column: Option<String>,

    #[arg(long = "exam", help = "Exam column, in plotting order (repeatable; default: all but the first and name columns)")]
    pub exams: Vec<String>,

    #[arg(long, default_value_t = DEFAULT_UPPER_BOUND, allow_negative_numbers = true, help = "Total population; the worst rank on the y axis")]
    pub population: i64,

    #[arg(long, default_value = "light", value_parser = ["light", "dark"], help = "Chart theme")]
    pub theme: String,

    #[arg(long, default_value = "全班成績報表.zip")]
    pub out: PathBuf,
}
