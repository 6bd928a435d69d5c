//! The tools module holds the small transforms and the helpers around them.
//!
//! The tools are:
//! - block_flatten: Recursive quadrant flattening of a square matrix.
//! - rle: Dual-mode (run and literal) run-length encoding.
//! - mtf: Move-To-Front transform and its inverse.
//! - freq_count: Deterministic frequency tables.
//! - matrix_in: Load a matrix from a text file.
//! - report: Plain text reports for each pipeline.
//! - cli: Command line interface.
//!
pub mod block_flatten;
pub mod cli;
pub mod freq_count;
pub mod matrix_in;
pub mod mtf;
pub mod report;
pub mod rle;
