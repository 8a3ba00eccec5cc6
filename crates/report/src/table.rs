// File: crates/report/src/table.rs
// Summary: In-memory score table with a header row; loaded from CSV or built directly.

use std::io::Read;
use std::path::Path;

use crate::error::{ConfigError, TableError};

/// One raw cell. CSV input only produces `Empty` and `Text`; `Number` exists
/// for tables assembled in code.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

impl Cell {
    /// Text used when the cell names something, e.g. a student.
    pub fn display(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) if n.fract() == 0.0 && n.is_finite() => format!("{}", *n as i64),
            Cell::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        if s.is_empty() { Cell::Empty } else { Cell::Text(s.to_string()) }
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        if s.is_empty() { Cell::Empty } else { Cell::Text(s) }
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

/// Rows of cells sharing one header. Every row has exactly one cell per
/// header column; this is checked on construction and never changes after.
#[derive(Clone, Debug, Default)]
pub struct ScoreTable {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl ScoreTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self, TableError> {
        let expected = headers.len();
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(TableError::RaggedRow { row, expected, found: cells.len() });
        }
        Ok(Self { headers, rows })
    }

    /// Read a CSV with a header row. Cells are kept as raw text.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = rdr
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        for rec in rdr.records() {
            let rec = rec?;
            rows.push(rec.iter().map(Cell::from).collect());
        }
        Self::new(headers, rows)
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| TableError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_csv_reader(std::io::BufReader::new(file))
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Like `column_index`, but a missing column is a configuration error.
    pub fn require_column(&self, name: &str) -> Result<usize, ConfigError> {
        self.column_index(name)
            .ok_or_else(|| ConfigError::UnknownColumn { column: name.to_string() })
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Cell]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(column))
    }
}
