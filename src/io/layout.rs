//! ASCII region layouts and board population
//!
//! A layout is one string per row, one alphanumeric character per cell. The
//! character's value in base 36 is the region id, so `'0'`–`'9'` cover the
//! common case and `'a'`/`'A'` upward extend it to 36 regions.

use crate::io::error::{PuzzleError, Result};
use crate::spatial::Board;

/// The 8×8 demonstration board used by the CLI's `--sample` flag
pub const SAMPLE_LAYOUT: [&str; 8] = [
    "01111122",
    "01311222",
    "11317222",
    "11117242",
    "15112242",
    "15162222",
    "11162222",
    "11222222",
];

/// Radix for reading cell characters as region ids
const CELL_RADIX: u32 = 36;

/// Build a populated board from ASCII layout rows
///
/// # Errors
///
/// Returns an error if the layout is empty, not square, ragged, or contains
/// a cell character outside `[0-9a-zA-Z]`.
pub fn parse_layout<S: AsRef<str>>(rows: &[S]) -> Result<Board> {
    if rows.is_empty() {
        return Err(PuzzleError::EmptyLayout);
    }

    let size = rows.first().map_or(0, |row| row.as_ref().chars().count());
    if rows.len() != size {
        return Err(PuzzleError::NotSquare {
            rows: rows.len(),
            cols: size,
        });
    }

    let mut board = Board::new(size);
    for (row_index, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        let found = row.chars().count();
        if found != size {
            return Err(PuzzleError::RaggedLayout {
                row: row_index,
                found,
                expected: size,
            });
        }

        for (col_index, cell) in row.chars().enumerate() {
            let region = cell
                .to_digit(CELL_RADIX)
                .ok_or(PuzzleError::InvalidCell {
                    row: row_index,
                    col: col_index,
                    found: cell,
                })?;
            board.set_region(row_index, col_index, region as usize);
        }
    }

    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::{PuzzleError, SAMPLE_LAYOUT, parse_layout};

    #[test]
    fn test_sample_layout_parses_to_eight_regions() {
        let board = match parse_layout(&SAMPLE_LAYOUT) {
            Ok(board) => board,
            Err(error) => unreachable!("sample layout must parse: {error}"),
        };
        assert_eq!(board.size(), 8);
        assert_eq!(board.region(0, 0), 0);
        assert_eq!(board.region(2, 3), 1);
        assert_eq!(board.region(3, 6), 4);
        assert_eq!(board.region(7, 7), 2);

        let mut ids = std::collections::HashSet::new();
        for row in 0..board.size() {
            for col in 0..board.size() {
                ids.insert(board.region(row, col));
            }
        }
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn test_letters_extend_the_region_id_range() {
        let board = match parse_layout(&["ab", "ba"]) {
            Ok(board) => board,
            Err(error) => unreachable!("letter layout must parse: {error}"),
        };
        assert_eq!(board.region(0, 0), 10);
        assert_eq!(board.region(0, 1), 11);
    }

    #[test]
    fn test_empty_layout_is_rejected() {
        let rows: [&str; 0] = [];
        assert!(matches!(parse_layout(&rows), Err(PuzzleError::EmptyLayout)));
    }

    #[test]
    fn test_non_square_layout_is_rejected() {
        let result = parse_layout(&["012", "012"]);
        assert!(matches!(
            result,
            Err(PuzzleError::NotSquare { rows: 2, cols: 3 })
        ));
    }

    #[test]
    fn test_ragged_row_is_rejected() {
        let result = parse_layout(&["012", "01", "012"]);
        assert!(matches!(
            result,
            Err(PuzzleError::RaggedLayout {
                row: 1,
                found: 2,
                expected: 3
            })
        ));
    }

    #[test]
    fn test_non_alphanumeric_cell_is_rejected() {
        let result = parse_layout(&["0!", "00"]);
        assert!(matches!(
            result,
            Err(PuzzleError::InvalidCell {
                row: 0,
                col: 1,
                found: '!'
            })
        ));
    }
}
