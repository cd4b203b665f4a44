//! Backtracking solver for colored-region queens puzzles
//!
//! Given an N×N board partitioned into N color regions, the solver places
//! exactly one queen per row, per column, and per region such that no two
//! queens touch, even diagonally. Regions are searched smallest-first with
//! row, column, and adjacency pruning.

#![forbid(unsafe_code)]

/// Region extraction and the backtracking search engine
pub mod algorithm;
/// Layout parsing, rendering, and error handling
pub mod io;
/// Board state, markers, and change notification
pub mod spatial;

pub use io::error::{PuzzleError, Result};
