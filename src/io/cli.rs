//! Command-line interface for solving region layouts supplied as arguments

use clap::Parser;

use crate::algorithm::solver::solve;
use crate::io::error::{PuzzleError, Result};
use crate::io::layout::{SAMPLE_LAYOUT, parse_layout};
use crate::io::render::{render_markers, render_regions};
use crate::spatial::Board;

#[derive(Parser)]
#[command(name = "starqueens")]
#[command(
    version,
    about = "Solve colored-region queens puzzles from ASCII layouts"
)]
/// Command-line arguments for the puzzle solver
pub struct Cli {
    /// Board layout, one string of region ids per row (e.g. "0011" "0011" "2233" "2233")
    #[arg(value_name = "ROW", required_unless_present = "sample", conflicts_with = "sample")]
    pub rows: Vec<String>,

    /// Solve the built-in 8x8 sample board instead of reading rows
    #[arg(short, long)]
    pub sample: bool,

    /// Print only the queen coordinates, one "row col" pair per line
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Build the board selected by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the supplied layout rows are malformed.
    pub fn layout(&self) -> Result<Board> {
        if self.sample {
            parse_layout(&SAMPLE_LAYOUT)
        } else {
            parse_layout(&self.rows)
        }
    }
}

/// Parse the requested layout, solve it, and print the outcome
///
/// # Errors
///
/// Returns an error if the layout is malformed or the board admits no valid
/// queen assignment.
// Terminal output is this binary's purpose
#[allow(clippy::print_stdout)]
pub fn run(cli: &Cli) -> Result<()> {
    let mut board = cli.layout()?;

    if !cli.quiet {
        print!("{}", render_regions(&board));
        println!();
    }

    let queens = solve(&mut board).ok_or(PuzzleError::Unsolvable)?;

    if cli.quiet {
        for coord in &queens {
            println!("{} {}", coord[0], coord[1]);
        }
    } else {
        print!("{}", render_markers(&board));
    }

    Ok(())
}
