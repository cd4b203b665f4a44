//! Error types for layout parsing and the command-line surface

use std::fmt;

/// Main error type for puzzle I/O operations
///
/// The solver itself never produces one of these: an unsolvable board is
/// signaled by an absent result, and only the CLI converts that outcome
/// into [`PuzzleError::Unsolvable`] for its exit path.
#[derive(Debug)]
pub enum PuzzleError {
    /// Layout contained no rows
    EmptyLayout,

    /// A layout row's length disagrees with the first row's
    RaggedLayout {
        /// Index of the offending row
        row: usize,
        /// Cell count of the offending row
        found: usize,
        /// Cell count of the first row
        expected: usize,
    },

    /// Layout has a different number of rows than columns
    NotSquare {
        /// Number of rows supplied
        rows: usize,
        /// Cells per row
        cols: usize,
    },

    /// A cell character is not an alphanumeric region id
    InvalidCell {
        /// Row of the offending cell
        row: usize,
        /// Column of the offending cell
        col: usize,
        /// The character found there
        found: char,
    },

    /// The configured board admits no valid queen assignment
    Unsolvable,
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLayout => {
                write!(f, "Layout is empty: expected one row of region ids per line")
            }
            Self::RaggedLayout {
                row,
                found,
                expected,
            } => {
                write!(
                    f,
                    "Layout row {row} has {found} cells, expected {expected}"
                )
            }
            Self::NotSquare { rows, cols } => {
                write!(f, "Layout is not square: {rows} rows of {cols} cells")
            }
            Self::InvalidCell { row, col, found } => {
                write!(
                    f,
                    "Invalid cell character '{found}' at ({row}, {col}): region ids are alphanumeric"
                )
            }
            Self::Unsolvable => {
                write!(f, "Board admits no valid queen assignment")
            }
        }
    }
}

impl std::error::Error for PuzzleError {}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;
