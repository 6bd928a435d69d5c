//! The bwt_algorithms module holds the Burrows-Wheeler Transform.
//!
//! The BWT permutes a string so that characters followed by similar contexts end up next to each
//! other. The output has long runs of identical characters, which the Move-To-Front transform
//! turns into runs of zeros.
//!
//! Rotations are sorted by comparing offsets into the input with wraparound, so the rotation table
//! is never built. A suffix array construction could replace the sort without changing the output.
//!
pub mod bwt_sort;
