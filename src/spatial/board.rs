//! Puzzle board state with per-cell region and marker storage
//!
//! The board is a square row-major grid of (region, marker) cells backed by
//! `ndarray`. Mutators are atomic and notify the registered observer after
//! each state change; none of them enforce puzzle rules, which are the
//! solver's responsibility alone.

use ndarray::Array2;

use crate::spatial::observer::{BoardEvent, EventCallback, EventDispatcher, EventKind};

/// Per-cell marker state
///
/// `Blocked` is carried for the display collaborator; the search engine only
/// ever writes `Queen` and `Empty`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Marker {
    /// No marker present
    #[default]
    Empty,
    /// A placed queen
    Queen,
    /// Cell reserved as unusable
    Blocked,
}

/// A single board cell: assigned region id plus current marker
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// Region (color) id, assigned once during board population
    pub region: usize,
    /// Current marker, mutated only during solving
    pub marker: Marker,
}

/// Square puzzle board with observer notification on every mutation
///
/// Created with all cells empty in region 0; the caller assigns region ids
/// before solving. Not safe for concurrent solve calls: the solver mutates
/// markers in place and rolls them back during backtracking.
#[derive(Debug)]
pub struct Board {
    cells: Array2<Cell>,
    observers: EventDispatcher,
}

impl Board {
    /// Create an empty N×N board with every cell in region 0
    pub fn new(size: usize) -> Self {
        Self {
            cells: Array2::default((size, size)),
            observers: EventDispatcher::default(),
        }
    }

    /// Board edge length
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Assign a cell's region id, leaving its marker unchanged
    ///
    /// # Panics
    ///
    /// Panics if the coordinates lie outside the board.
    pub fn set_region(&mut self, row: usize, col: usize, region: usize) {
        self.check_bounds(row, col);
        if let Some(cell) = self.cells.get_mut([row, col]) {
            cell.region = region;
        }
        self.observers
            .dispatch(&BoardEvent::RegionUpdated { row, col, region });
    }

    /// Write a queen marker; no rule checking is performed
    ///
    /// # Panics
    ///
    /// Panics if the coordinates lie outside the board.
    pub fn place_queen(&mut self, row: usize, col: usize) {
        self.set_marker(row, col, Marker::Queen);
    }

    /// Write a blocked marker
    ///
    /// # Panics
    ///
    /// Panics if the coordinates lie outside the board.
    pub fn place_blocked(&mut self, row: usize, col: usize) {
        self.set_marker(row, col, Marker::Blocked);
    }

    /// Clear the cell's marker back to empty
    ///
    /// # Panics
    ///
    /// Panics if the coordinates lie outside the board.
    pub fn remove_marker(&mut self, row: usize, col: usize) {
        self.set_marker(row, col, Marker::Empty);
    }

    /// Current marker at the coordinates
    ///
    /// # Panics
    ///
    /// Panics if the coordinates lie outside the board.
    pub fn marker(&self, row: usize, col: usize) -> Marker {
        self.check_bounds(row, col);
        self.cells
            .get([row, col])
            .map_or(Marker::Empty, |cell| cell.marker)
    }

    /// Region id at the coordinates
    ///
    /// # Panics
    ///
    /// Panics if the coordinates lie outside the board.
    pub fn region(&self, row: usize, col: usize) -> usize {
        self.check_bounds(row, col);
        self.cells.get([row, col]).map_or(0, |cell| cell.region)
    }

    /// True iff the cell carries no marker
    ///
    /// # Panics
    ///
    /// Panics if the coordinates lie outside the board.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.marker(row, col) == Marker::Empty
    }

    /// Snapshot of the marker grid, used for rollback verification
    pub fn markers(&self) -> Array2<Marker> {
        self.cells.mapv(|cell| cell.marker)
    }

    /// Coordinates of every queen marker in row-major order
    pub fn queens(&self) -> Vec<[usize; 2]> {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.marker == Marker::Queen)
            .map(|((row, col), _)| [row, col])
            .collect()
    }

    /// Register a callback for one event kind, replacing any previous one
    pub fn set_callback(&mut self, kind: EventKind, callback: EventCallback) {
        self.observers.set(kind, callback);
    }

    /// Remove the callback for one event kind
    pub fn unset_callback(&mut self, kind: EventKind) {
        self.observers.unset(kind);
    }

    fn set_marker(&mut self, row: usize, col: usize, marker: Marker) {
        self.check_bounds(row, col);
        if let Some(cell) = self.cells.get_mut([row, col]) {
            cell.marker = marker;
        }
        let event = match marker {
            Marker::Queen => BoardEvent::QueenPlaced { row, col },
            Marker::Blocked => BoardEvent::BlockerPlaced { row, col },
            Marker::Empty => BoardEvent::MarkerRemoved { row, col },
        };
        self.observers.dispatch(&event);
    }

    fn check_bounds(&self, row: usize, col: usize) {
        assert!(
            row < self.size() && col < self.size(),
            "cell ({row}, {col}) outside {n}x{n} board",
            n = self.size()
        );
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{Board, BoardEvent, EventKind, Marker};

    #[test]
    fn test_new_board_is_empty_region_zero() {
        let board = Board::new(3);
        assert_eq!(board.size(), 3);
        for row in 0..3 {
            for col in 0..3 {
                assert!(board.is_empty(row, col));
                assert_eq!(board.region(row, col), 0);
            }
        }
    }

    #[test]
    fn test_marker_mutators_are_independent_of_region() {
        let mut board = Board::new(2);
        board.set_region(1, 0, 7);
        board.place_queen(1, 0);
        assert_eq!(board.marker(1, 0), Marker::Queen);
        assert_eq!(board.region(1, 0), 7);

        board.place_blocked(1, 0);
        assert_eq!(board.marker(1, 0), Marker::Blocked);
        assert!(!board.is_empty(1, 0));

        board.remove_marker(1, 0);
        assert!(board.is_empty(1, 0));
        assert_eq!(board.region(1, 0), 7, "clearing a marker keeps the region");
    }

    #[test]
    fn test_queens_snapshot_lists_row_major_coordinates() {
        let mut board = Board::new(3);
        board.place_queen(2, 0);
        board.place_queen(0, 1);
        assert_eq!(board.queens(), vec![[0, 1], [2, 0]]);
    }

    #[test]
    fn test_callbacks_fire_for_matching_kind_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut board = Board::new(2);
        board.set_callback(
            EventKind::QueenPlaced,
            Box::new(move |event| sink.borrow_mut().push(*event)),
        );

        board.place_queen(0, 1);
        board.place_blocked(1, 0);
        board.remove_marker(0, 1);

        assert_eq!(
            *seen.borrow(),
            vec![BoardEvent::QueenPlaced { row: 0, col: 1 }]
        );
    }

    #[test]
    fn test_registering_a_callback_replaces_the_previous_one() {
        let first_hits = Rc::new(RefCell::new(0));
        let second_hits = Rc::new(RefCell::new(0));

        let mut board = Board::new(2);
        let first_sink = Rc::clone(&first_hits);
        board.set_callback(
            EventKind::RegionUpdated,
            Box::new(move |_| *first_sink.borrow_mut() += 1),
        );
        let second_sink = Rc::clone(&second_hits);
        board.set_callback(
            EventKind::RegionUpdated,
            Box::new(move |_| *second_sink.borrow_mut() += 1),
        );

        board.set_region(0, 0, 1);
        assert_eq!(*first_hits.borrow(), 0);
        assert_eq!(*second_hits.borrow(), 1);
    }

    #[test]
    fn test_unset_callback_silences_events() {
        let hits = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&hits);

        let mut board = Board::new(2);
        board.set_callback(
            EventKind::MarkerRemoved,
            Box::new(move |_| *sink.borrow_mut() += 1),
        );
        board.remove_marker(0, 0);
        board.unset_callback(EventKind::MarkerRemoved);
        board.remove_marker(0, 0);

        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    #[should_panic(expected = "outside 2x2 board")]
    fn test_out_of_range_coordinates_are_rejected() {
        let mut board = Board::new(2);
        board.place_queen(2, 0);
    }
}
