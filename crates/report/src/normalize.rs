// File: crates/report/src/normalize.rs
// Summary: Score normalizer; turns raw cells into plot-ready ranks or absent.

use crate::table::Cell;

/// Coerce one cell to a finite number. Empty, non-numeric and non-finite
/// cells become `None`; a malformed score never fails the row.
pub fn normalize(cell: &Cell) -> Option<f64> {
    let value = match cell {
        Cell::Empty => return None,
        Cell::Number(n) => *n,
        Cell::Text(s) => s.trim().parse::<f64>().ok()?,
    };
    value.is_finite().then_some(value)
}
