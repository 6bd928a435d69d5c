//! The huffman module builds a prefix code from symbol frequencies and encodes a sequence with it.
//!
//! Ties between equal weights are broken by creation order, so the same input always gives the
//! same tree, the same codes and the same bit string.
//!
pub mod huffman;
