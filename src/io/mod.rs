//! Input/output operations and error handling

/// Command-line interface for solving layouts supplied as arguments
pub mod cli;
/// Error types for the I/O surface
pub mod error;
/// ASCII region layouts and board population
pub mod layout;
/// Plain-text rendering of boards
pub mod render;
