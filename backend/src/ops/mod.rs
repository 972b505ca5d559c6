//! The five matrix operations.
//!
//! All operations take a validated [`SquareMatrix`] and are pure: no side
//! effects, deterministic, safe on any thread.
//!
//! `sum` and `multiply` re-parse cell text on their own. Validation already
//! guaranteed parseability, so a failure here cannot normally occur; if the
//! two parse rules ever diverge the result degrades to the NaN sentinel
//! rather than an error.

use crate::models::{MatrixOp, OpOutput, SquareMatrix};

/// Render the matrix as CSV text: cells joined with `,`, rows with `\n`.
pub fn print(matrix: &SquareMatrix) -> String {
    matrix
        .rows()
        .iter()
        .map(|row| row.join(","))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Join every cell across all rows, row-major, with `,`.
pub fn flatten(matrix: &SquareMatrix) -> String {
    matrix
        .rows()
        .iter()
        .map(|row| row.join(","))
        .collect::<Vec<_>>()
        .join(",")
}

fn cell_value(cell: &str) -> f64 {
    cell.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Sum all cells in row-major order, starting from 0.
pub fn sum(matrix: &SquareMatrix) -> f64 {
    matrix
        .rows()
        .iter()
        .flatten()
        .fold(0.0, |acc, cell| acc + cell_value(cell))
}

/// Multiply all cells in row-major order, starting from 1.
pub fn multiply(matrix: &SquareMatrix) -> f64 {
    matrix
        .rows()
        .iter()
        .flatten()
        .fold(1.0, |acc, cell| acc * cell_value(cell))
}

/// Transpose the matrix and render it as `print` does.
///
/// A 1x1 matrix short-circuits to the sole cell's text, with no join
/// formatting applied.
pub fn invert(matrix: &SquareMatrix) -> String {
    let rows = matrix.rows();
    if matrix.size() == 1 {
        return rows[0][0].clone();
    }

    let transposed: Vec<String> = (0..matrix.size())
        .map(|col| {
            rows.iter()
                .map(|row| row[col].as_str())
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect();

    transposed.join("\n")
}

/// Apply one operation to a validated matrix.
pub fn apply(op: MatrixOp, matrix: &SquareMatrix) -> OpOutput {
    match op {
        MatrixOp::Echo => OpOutput::Text(print(matrix)),
        MatrixOp::Invert => OpOutput::Text(invert(matrix)),
        MatrixOp::Flatten => OpOutput::Text(flatten(matrix)),
        MatrixOp::Sum => OpOutput::Number(sum(matrix)),
        MatrixOp::Multiply => OpOutput::Number(multiply(matrix)),
    }
}
