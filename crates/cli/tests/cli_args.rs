// File: crates/cli/tests/cli_args.rs
// Purpose: Flag parsing, defaults and column fallback.

use clap::Parser;
use rank_report::ScoreTable;
use rank_trend::cli::Cli;
use rank_trend::run::report_config;

#[test]
fn defaults_match_the_classroom_setup() {
    let cli = Cli::parse_from(["rank-trend", "scores.csv"]);
    assert_eq!(cli.population, 300);
    assert_eq!(cli.font, None);
    assert_eq!(cli.font_dir, std::path::PathBuf::from("."));
    assert_eq!(cli.out, std::path::PathBuf::from("全班成績報表.zip"));
    assert_eq!(cli.theme, "light");
    assert!(cli.exams.is_empty());
}

#[test]
fn exams_are_repeatable_and_ordered() {
    let cli = Cli::parse_from([
        "rank-trend", "scores.csv", "--name-column", "姓名", "--exam", "期末", "--exam", "期中", "--population", "-1",
    ]);
    assert_eq!(cli.name_column.as_deref(), Some("姓名"));
    assert_eq!(cli.exams, vec!["期末", "期中"]);
    assert_eq!(cli.population, -1);
}

#[test]
fn columns_fall_back_to_table_defaults() {
    let table = ScoreTable::from_csv_reader("seat,name,e1,e2\n1,A,5,3\n".as_bytes()).unwrap();

    let cli = Cli::parse_from(["rank-trend", "scores.csv"]);
    let cfg = report_config(&cli, &table).unwrap();
    assert_eq!(cfg.name_column, "name");
    assert_eq!(cfg.exam_columns, vec!["e1", "e2"]);

    let cli = Cli::parse_from(["rank-trend", "scores.csv", "--name-column", "seat"]);
    let cfg = report_config(&cli, &table).unwrap();
    assert_eq!(cfg.exam_columns, vec!["name", "e1", "e2"], "only the first and name columns are excluded");

    let cli = Cli::parse_from(["rank-trend", "scores.csv", "--exam", "e2"]);
    let cfg = report_config(&cli, &table).unwrap();
    assert_eq!(cfg.exam_columns, vec!["e2"]);
}

#[test]
fn theme_accepts_only_presets() {
    let cli = Cli::try_parse_from(["rank-trend", "scores.csv", "--theme", "dark"]).unwrap();
    assert_eq!(cli.theme, "dark");
    assert!(Cli::try_parse_from(["rank-trend", "scores.csv", "--theme", "neon"]).is_err());
}
