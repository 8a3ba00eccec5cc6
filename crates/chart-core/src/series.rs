// File: crates/chart-core/src/series.rs
// Summary: Line series over categories where any slot may be absent.
// Notes:
// - Absent slots break the line: segments never bridge a gap, so a student
//   who missed an exam shows two separate runs instead of an invented value.

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    /// One slot per category; `None` marks an absent value.
    pub values: Vec<Option<f64>>,
}

impl Series {
    pub fn new(values: Vec<Option<f64>>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Present values with their category index, in order.
    pub fn points(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|v| (i, v)))
    }

    /// Maximal runs of consecutive present values. A run of one point is kept
    /// so the caller can still draw its marker.
    pub fn segments(&self) -> Vec<Vec<(usize, f64)>> {
        let mut out = Vec::new();
        let mut run: Vec<(usize, f64)> = Vec::new();
        for (i, v) in self.values.iter().enumerate() {
            match v {
                Some(v) => run.push((i, *v)),
                None => {
                    if !run.is_empty() {
                        out.push(std::mem::take(&mut run));
                    }
                }
            }
        }
        if !run.is_empty() {
            out.push(run);
        }
        out
    }
}

/// Text drawn above a plotted point: the value rounded to the nearest integer.
pub fn annotation_label(value: f64) -> String {
    format!("{}", value.round() as i64)
}
