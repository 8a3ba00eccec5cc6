// File: crates/report/tests/table.rs
// Purpose: CSV ingestion, column lookup and the shared-column-set invariant.

use rank_report::config::{default_exam_columns, default_name_column};
use rank_report::{Cell, ConfigError, ReportConfig, ScoreTable, TableError};

const CSV: &str = "seat,name,e1,e2\n1,A,5,3\n2,B,,7\n";

#[test]
fn loads_headers_and_raw_cells() {
    let table = ScoreTable::from_csv_reader(CSV.as_bytes()).expect("valid csv");
    assert_eq!(table.headers(), ["seat", "name", "e1", "e2"]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.cell(0, 1), Some(&Cell::Text("A".into())));
    assert_eq!(table.cell(1, 2), Some(&Cell::Empty));
    assert_eq!(table.column_index("e2"), Some(3));
    assert_eq!(table.column_index("E2"), None, "names match exactly");
}

#[test]
fn unicode_headers_and_names_survive() {
    let csv = "座號,姓名,第一次段考\n1,王小明,12\n";
    let table = ScoreTable::from_csv_reader(csv.as_bytes()).unwrap();
    assert_eq!(table.column_index("姓名"), Some(1));
    assert_eq!(table.cell(0, 1).map(Cell::display).as_deref(), Some("王小明"));
}

#[test]
fn ragged_csv_is_rejected() {
    let err = ScoreTable::from_csv_reader("a,b\n1,2\n3\n".as_bytes()).unwrap_err();
    assert!(matches!(err, TableError::Csv(_)));
}

#[test]
fn ragged_rows_are_rejected_in_code() {
    let err = ScoreTable::new(
        vec!["a".into(), "b".into()],
        vec![vec![Cell::Empty, Cell::Empty], vec![Cell::Empty]],
    )
    .unwrap_err();
    assert!(matches!(err, TableError::RaggedRow { row: 1, expected: 2, found: 1 }));
}

#[test]
fn missing_file_reports_path() {
    let err = ScoreTable::from_csv_path("target/no-such-scores.csv").unwrap_err();
    assert!(matches!(err, TableError::Open { .. }));
    assert!(err.to_string().contains("no-such-scores.csv"));
}

#[test]
fn unknown_column_is_a_config_error() {
    let table = ScoreTable::from_csv_reader(CSV.as_bytes()).unwrap();
    let err = table.require_column("e9").unwrap_err();
    assert!(matches!(err, ConfigError::UnknownColumn { ref column } if column == "e9"));
}

#[test]
fn default_columns_skip_first_and_name() {
    let headers: Vec<String> = ["seat", "name", "e1", "e2"].iter().map(|s| s.to_string()).collect();
    assert_eq!(default_name_column(&headers), Some("name"));
    assert_eq!(default_exam_columns(&headers, "name"), vec!["e1", "e2"]);

    let cfg = ReportConfig::defaults_for(&headers, 300).unwrap();
    assert_eq!(cfg.name_column, "name");
    assert_eq!(cfg.exam_columns, vec!["e1", "e2"]);

    let single = vec!["only".to_string()];
    assert_eq!(default_name_column(&single), Some("only"));
    assert!(default_exam_columns(&single, "only").is_empty());
    assert!(ReportConfig::defaults_for(&[], 300).is_none());
}

#[test]
fn numeric_names_display_without_fraction() {
    assert_eq!(Cell::Number(12.0).display(), "12");
    assert_eq!(Cell::Number(12.5).display(), "12.5");
    assert_eq!(Cell::Empty.display(), "");
}
