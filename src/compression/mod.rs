//! The compression module wires the engines into the three independent pipelines:
//! - Matrix: block flattening, then run-length encoding and Huffman coding of the flat sequence.
//! - Text: Burrows-Wheeler Transform, then Move-To-Front over the BWT output.
//! - Arithmetic: arithmetic coding of the text.
//!
//! Each pipeline returns its results together with a report. Writing the report is left to
//! `write_report`, called by the binary.
//!
pub mod compress;
