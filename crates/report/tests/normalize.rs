// File: crates/report/tests/normalize.rs
// Purpose: Malformed score cells become absent values instead of errors.

use rank_report::{normalize, Cell};

#[test]
fn parses_numbers_and_skips_the_rest() {
    assert_eq!(normalize(&Cell::from("5")), Some(5.0));
    assert_eq!(normalize(&Cell::from(" 12 ")), Some(12.0));
    assert_eq!(normalize(&Cell::from("3.5")), Some(3.5));
    assert_eq!(normalize(&Cell::Number(7.0)), Some(7.0));
}

#[test]
fn empty_and_garbage_are_absent() {
    assert_eq!(normalize(&Cell::Empty), None);
    assert_eq!(normalize(&Cell::from("")), None);
    assert_eq!(normalize(&Cell::from("   ")), None);
    assert_eq!(normalize(&Cell::from("缺考")), None);
    assert_eq!(normalize(&Cell::from("12th")), None);
}

#[test]
fn non_finite_values_are_absent() {
    assert_eq!(normalize(&Cell::from("NaN")), None);
    assert_eq!(normalize(&Cell::from("inf")), None);
    assert_eq!(normalize(&Cell::Number(f64::NAN)), None);
    assert_eq!(normalize(&Cell::Number(f64::NEG_INFINITY)), None);
}
