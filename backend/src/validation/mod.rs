//! Matrix shape and content validation.
//!
//! A parsed grid becomes a [`SquareMatrix`] only if it has N rows of exactly
//! N cells each (N >= 1) and every cell is numeric text. Rows are scanned in
//! order; within a row the length check comes first, since numeric scanning
//! is meaningless for a ragged row.

use crate::error::{ValidationError, ValidationResult};
use crate::models::{RawGrid, SquareMatrix};

/// Check whether a single cell holds numeric text.
///
/// Host-standard rule: `f64` parse after trimming, so leading/trailing
/// whitespace and an optional sign are allowed, thousands separators and
/// empty cells are not.
pub fn is_numeric_cell(cell: &str) -> bool {
    cell.trim().parse::<f64>().is_ok()
}

/// Validate a grid as a square numeric matrix.
///
/// Fails with `Invalid matrix size` for an empty grid or any row whose
/// length differs from the row count, and with `Matrix contains invalid
/// characters` for any non-numeric cell. On success the rows move into the
/// [`SquareMatrix`] without copying.
pub fn validate(grid: RawGrid) -> ValidationResult<SquareMatrix> {
    let size = grid.len();
    if size == 0 {
        return Err(ValidationError::InvalidSize);
    }

    for row in &grid {
        if row.len() != size {
            return Err(ValidationError::InvalidSize);
        }
        if row.iter().any(|cell| !is_numeric_cell(cell)) {
            return Err(ValidationError::InvalidCharacters);
        }
    }

    Ok(SquareMatrix::from_validated(grid))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> RawGrid {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_accepts_square_numeric_grid() {
        let m = validate(grid(&[&["1", "2"], &["3", "4"]])).unwrap();
        assert_eq!(m.size(), 2);
    }

    #[test]
    fn test_accepts_one_by_one() {
        let m = validate(grid(&[&["7"]])).unwrap();
        assert_eq!(m.size(), 1);
    }

    #[test]
    fn test_rejects_empty_grid() {
        assert_eq!(validate(vec![]).unwrap_err(), ValidationError::InvalidSize);
    }

    #[test]
    fn test_rejects_ragged_row() {
        let err = validate(grid(&[&["1", "2"], &["3", "4", "5"]])).unwrap_err();
        assert_eq!(err, ValidationError::InvalidSize);
    }

    #[test]
    fn test_rejects_rectangular_grid() {
        // 2 rows of 3 cells: every row fails the length-equals-row-count rule.
        let err = validate(grid(&[&["1", "2", "3"], &["4", "5", "6"]])).unwrap_err();
        assert_eq!(err, ValidationError::InvalidSize);
    }

    #[test]
    fn test_rejects_non_numeric_cell() {
        let err = validate(grid(&[&["1", "a"], &["3", "4"]])).unwrap_err();
        assert_eq!(err, ValidationError::InvalidCharacters);
    }

    #[test]
    fn test_ragged_wins_over_non_numeric_in_same_row() {
        // The short row also holds a letter; the length violation is reported.
        let err = validate(grid(&[&["x"], &["1", "2"]])).unwrap_err();
        assert_eq!(err, ValidationError::InvalidSize);
    }

    #[test]
    fn test_shape_checked_before_any_numeric_scan() {
        // Non-square grid full of letters still reports the size violation.
        let err = validate(grid(&[&["a", "b", "c"], &["d", "e", "f"]])).unwrap_err();
        assert_eq!(err, ValidationError::InvalidSize);
    }

    #[test]
    fn test_accepts_signed_float_and_padded_cells() {
        let m = validate(grid(&[&["-1.5", " 2 "], &["+3", "4e2"]])).unwrap();
        assert_eq!(m.size(), 2);
    }

    #[test]
    fn test_rejects_empty_cell() {
        let err = validate(grid(&[&["1", ""], &["3", "4"]])).unwrap_err();
        assert_eq!(err, ValidationError::InvalidCharacters);
    }

    #[test]
    fn test_numeric_cell_rule() {
        assert!(is_numeric_cell("42"));
        assert!(is_numeric_cell(" -0.5 "));
        assert!(!is_numeric_cell("1,000"));
        assert!(!is_numeric_cell("abc"));
        assert!(!is_numeric_cell(""));
    }
}
