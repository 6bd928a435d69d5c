//! A small suite of lossless compression primitives.
//!
//! Version 0.1.0
//!
//! Three independent pipelines are provided:
//! - Block flattening of a square matrix, followed by run-length encoding and Huffman coding.
//! - Burrows-Wheeler Transform followed by a Move-To-Front transform.
//! - Fixed-point (exact rational) arithmetic coding.
//!
//! Every engine is a pure function over in-memory data. Nothing is retained between calls, so
//! separate invocations may run on separate threads without locking.
//!
//! Basic usage from the command line is as follows:
//!
//! `$> blockpack matrix matrix.txt`
//!
//! `$> blockpack bwt banana`
//!
//! `$> blockpack arith -o report.txt "abracadabra"`
//!
pub mod arithmetic_coding;
pub mod bwt_algorithms;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use error::CodecError;
