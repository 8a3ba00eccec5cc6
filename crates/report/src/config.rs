// File: crates/report/src/config.rs
// Summary: Run configuration (column choice, y-axis bound) and chart wording.

/// Total population used as the y-axis bound when none is given.
pub const DEFAULT_UPPER_BOUND: i64 = 300;

/// Fixed wording drawn on every chart and used for archive entry names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartText {
    /// Appended to the student's name to form the chart title.
    pub title_suffix: String,
    pub x_caption: String,
    pub y_caption: String,
    /// Appended to the student's name to form the entry file stem.
    pub file_suffix: String,
    pub file_extension: String,
}

impl Default for ChartText {
    fn default() -> Self {
        Self {
            title_suffix: " - 校排名趨勢圖".to_string(),
            x_caption: "考試次別".to_string(),
            y_caption: "校排名".to_string(),
            file_suffix: "_校排名".to_string(),
            file_extension: "png".to_string(),
        }
    }
}

/// Everything a run needs besides the table and the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportConfig {
    pub name_column: String,
    /// Exam columns in plotting order (left to right).
    pub exam_columns: Vec<String>,
    /// Worst rank shown on the y axis, typically the school population.
    pub y_axis_upper_bound: i64,
    pub text: ChartText,
}

impl ReportConfig {
    pub fn new(name_column: impl Into<String>, exam_columns: Vec<String>, y_axis_upper_bound: i64) -> Self {
        Self {
            name_column: name_column.into(),
            exam_columns,
            y_axis_upper_bound,
            text: ChartText::default(),
        }
    }

    pub fn with_text(mut self, text: ChartText) -> Self {
        self.text = text;
        self
    }

    /// Column choice used when the caller picks nothing: the second column
    /// names the student and every other column except the first is an exam.
    pub fn defaults_for(headers: &[String], y_axis_upper_bound: i64) -> Option<Self> {
        let name = default_name_column(headers)?;
        let exams = default_exam_columns(headers, name);
        Some(Self::new(name, exams, y_axis_upper_bound))
    }
}

/// Second header when there are at least two, else the first.
pub fn default_name_column(headers: &[String]) -> Option<&str> {
    let idx = if headers.len() > 1 { 1 } else { 0 };
    headers.get(idx).map(String::as_str)
}

/// All headers except the first column and `name_column`, in table order.
pub fn default_exam_columns(headers: &[String], name_column: &str) -> Vec<String> {
    headers
        .iter()
        .enumerate()
        .filter(|(i, h)| *i != 0 && h.as_str() != name_column)
        .map(|(_, h)| h.clone())
        .collect()
}
