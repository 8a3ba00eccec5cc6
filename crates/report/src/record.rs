// File: crates/report/src/record.rs
// Summary: Per-row student record and its chart spec / archive entry name.

use chart_core::ChartSpec;

use crate::config::ChartText;
use crate::normalize::normalize;
use crate::table::Cell;

#[derive(Clone, Debug, PartialEq)]
pub struct ExamScore {
    pub label: String,
    pub value: Option<f64>,
}

/// One student's normalized scores; built per row and dropped after rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct StudentRecord {
    pub name: String,
    pub scores: Vec<ExamScore>,
}

impl StudentRecord {
    /// Build from a table row given resolved column indices. Indices come
    /// from the same table, so every lookup is in bounds.
    pub fn from_row(row: &[Cell], name_index: usize, exams: &[(String, usize)]) -> Self {
        let name = row.get(name_index).map(Cell::display).unwrap_or_default();
        let scores = exams
            .iter()
            .map(|(label, idx)| ExamScore {
                label: label.clone(),
                value: row.get(*idx).and_then(normalize),
            })
            .collect();
        Self { name, scores }
    }

    pub fn chart_spec(&self, y_axis_upper_bound: u32, text: &ChartText) -> ChartSpec {
        ChartSpec {
            title: format!("{}{}", self.name, text.title_suffix),
            x_caption: text.x_caption.clone(),
            y_caption: text.y_caption.clone(),
            x_labels: self.scores.iter().map(|s| s.label.clone()).collect(),
            y_values: self.scores.iter().map(|s| s.value).collect(),
            y_axis_upper_bound,
        }
    }

    /// Archive entry name: `<name><suffix>.<ext>`. Names are not sanitized or
    /// deduplicated.
    pub fn file_name(&self, text: &ChartText) -> String {
        format!("{}{}.{}", self.name, text.file_suffix, text.file_extension)
    }
}
