//! CLI entry point for the region queens puzzle solver

use clap::Parser;
use starqueens::io::cli::{Cli, run};

fn main() -> starqueens::Result<()> {
    let cli = Cli::parse();
    run(&cli)
}
