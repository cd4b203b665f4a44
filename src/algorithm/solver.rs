//! Backtracking placement search
//!
//! Regions are visited smallest-first, candidates within a region in board
//! scan order. Row, column, and adjacency pruning bound the branching
//! factor: each line holds at most one queen, each region exactly one. The
//! first complete assignment short-circuits the whole search.

use crate::algorithm::regions::RegionMap;
use crate::algorithm::search::SearchContext;
use crate::spatial::Board;

/// Solve the board in place
///
/// Returns the queen coordinates in placement order, with the board mutated
/// to hold the solution. Returns `None` when no valid assignment exists; the
/// recursive unwind has then removed every marker the search wrote, so a
/// board that started empty is handed back empty.
///
/// Worst case exponential in region size. For well-formed puzzles (N
/// regions on an N×N board) the pruning keeps the practical branching
/// factor small.
pub fn solve(board: &mut Board) -> Option<Vec<[usize; 2]>> {
    let regions = RegionMap::from_board(board);
    let mut context = SearchContext::new(board.size());
    place_queens(board, &regions, &mut context).then(|| context.into_queens())
}

/// One level of the depth-first search
///
/// Attempts every open candidate of the first unsatisfied region and
/// recurses. Returns `true` as soon as a complete assignment exists below
/// this level; returns `false` with the context and board restored to their
/// state at entry otherwise.
fn place_queens(board: &mut Board, regions: &RegionMap, context: &mut SearchContext) -> bool {
    if context.satisfied_count() == regions.len() && context.placed() == board.size() {
        return true;
    }

    let Some(region) = regions.iter().find(|region| !context.is_satisfied(region.id)) else {
        // Every region holds a queen yet rows remain open: the board was
        // populated with fewer than N regions, so no assignment exists.
        return false;
    };

    for &coord in &region.cells {
        if context.is_occupied(coord) || context.line_blocked(coord) || context.touches_queen(coord)
        {
            continue;
        }

        context.place(board, region.id, coord);
        if place_queens(board, regions, context) {
            return true;
        }
        context.retract(board, region.id, coord);
    }

    false
}
