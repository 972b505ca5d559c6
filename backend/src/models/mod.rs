//! Domain models for the matrix operations pipeline.
//!
//! This module contains the core data structures used throughout the pipeline:
//!
//! - [`RawGrid`] - Parsed CSV rows with no shape guarantee
//! - [`SquareMatrix`] - A validated square grid of numeric cells
//! - [`MatrixOp`] - The five supported operations
//! - [`OpOutput`] - Result of one operation (text or number)

use serde::Serialize;

// =============================================================================
// Grids
// =============================================================================

/// Rows of raw string cells, exactly as parsed from the CSV.
///
/// Produced by [`crate::parser`], consumed by [`crate::validation`].
/// Carries no guarantee about row lengths or cell contents.
pub type RawGrid = Vec<Vec<String>>;

/// A square grid of numeric-looking cells.
///
/// Invariants, established by [`crate::validation::validate`] (the only
/// constructor outside this module's tests):
///
/// - at least one row;
/// - every row has exactly as many cells as there are rows;
/// - every cell parses as `f64` after trimming.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix {
    rows: Vec<Vec<String>>,
}

impl SquareMatrix {
    /// Wrap validated rows. Callers must have checked the invariants.
    pub(crate) fn from_validated(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Number of rows (equal to the number of columns).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// The underlying rows, in row-major order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

// =============================================================================
// Operations
// =============================================================================

/// One of the five matrix operations exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixOp {
    /// Print the matrix back as CSV text.
    Echo,
    /// Transpose the matrix and print it.
    Invert,
    /// Join all cells into a single comma-separated line.
    Flatten,
    /// Sum all cells as numbers.
    Sum,
    /// Multiply all cells as numbers.
    Multiply,
}

impl MatrixOp {
    /// Endpoint / CLI name of the operation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Echo => "echo",
            Self::Invert => "invert",
            Self::Flatten => "flatten",
            Self::Sum => "sum",
            Self::Multiply => "multiply",
        }
    }
}

impl std::fmt::Display for MatrixOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Operation output
// =============================================================================

/// Result of a single operation.
///
/// Serializes untagged, so a success response body is a bare JSON string
/// (echo, flatten, invert) or a bare JSON number (sum, multiply).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OpOutput {
    Text(String),
    Number(f64),
}

impl std::fmt::Display for OpOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}
