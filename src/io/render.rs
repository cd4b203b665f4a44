//! Plain-text rendering of boards for terminal output

use crate::spatial::{Board, Marker};

/// Render the marker grid, one row per line
///
/// Queens print as `Q`, blocked cells as `#`, empty cells as `.`.
pub fn render_markers(board: &Board) -> String {
    render_with(board, |row, col| match board.marker(row, col) {
        Marker::Queen => 'Q',
        Marker::Blocked => '#',
        Marker::Empty => '.',
    })
}

/// Render the region grid using base-36 digits, one row per line
///
/// Region ids beyond 35 have no single-character form and print as `?`.
pub fn render_regions(board: &Board) -> String {
    render_with(board, |row, col| {
        u32::try_from(board.region(row, col))
            .ok()
            .and_then(|region| char::from_digit(region, 36))
            .unwrap_or('?')
    })
}

fn render_with(board: &Board, cell: impl Fn(usize, usize) -> char) -> String {
    let size = board.size();
    let mut out = String::with_capacity(size * (size + 1));
    for row in 0..size {
        for col in 0..size {
            out.push(cell(row, col));
        }
        out.push('\n');
    }
    out
}
