//! Tests for grid algebra over parsed ASC grids.

use asc_parser::parse_asc;
use grid_processor::{combine, CombineOp, GridProcessorError};
use test_utils::{asc_text, grid_from_rows, population_rows};

#[test]
fn test_missing_propagates_from_either_side() {
    let a = grid_from_rows(&population_rows(10, 6, 3));
    let b = grid_from_rows(&population_rows(10, 6, 4));

    let out = combine(&a, &b, CombineOp::Difference).unwrap();

    for row in 0..6 {
        for col in 0..10 {
            let expected_missing = a.get(row, col).is_none() || b.get(row, col).is_none();
            assert_eq!(
                out.get(row, col).is_none(),
                expected_missing,
                "cell ({row}, {col})"
            );
        }
    }
}

#[test]
fn test_range_recomputed_from_output() {
    let a = parse_asc("NODATA_value -9999\n10 20 -9999\n30 40 50\n").unwrap();
    let b = parse_asc("NODATA_value -9999\n1 25 7\n-9999 10 45\n").unwrap();

    let diff = combine(&a, &b, CombineOp::Difference).unwrap();
    // present: 9, -5, 30, 5 (cells 0,2 and 1,0 are missing)
    assert_eq!(diff.min_value(), Some(-5.0));
    assert_eq!(diff.max_value(), Some(30.0));

    let excess = combine(&a, &b, CombineOp::Excess).unwrap();
    assert_eq!(excess.min_value(), Some(0.0));
    assert_eq!(excess.max_value(), Some(30.0));
}

#[test]
fn test_header_copied_from_first_input() {
    let a = parse_asc(&asc_text(&population_rows(4, 2, 5), -180.0, -60.0)).unwrap();
    let b = parse_asc(&asc_text(&population_rows(4, 2, 5), 0.0, 0.0)).unwrap();

    let out = combine(&a, &b, CombineOp::Excess).unwrap();
    assert_eq!(out.header, a.header);
}

#[test]
fn test_inputs_untouched() {
    let a = grid_from_rows(&population_rows(5, 3, 2));
    let b = grid_from_rows(&population_rows(5, 3, 3));
    let (a_before, b_before) = (a.clone(), b.clone());

    let _ = combine(&a, &b, CombineOp::Difference).unwrap();

    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

#[test]
fn test_column_mismatch() {
    let a = grid_from_rows(&population_rows(5, 3, 2));
    let b = grid_from_rows(&population_rows(4, 3, 2));

    assert_eq!(
        combine(&a, &b, CombineOp::Excess).unwrap_err(),
        GridProcessorError::ShapeMismatch {
            left: (3, 5),
            right: (3, 4)
        }
    );
}
