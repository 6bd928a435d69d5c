//! The single error type shared by every engine and by the command line driver.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    /// The matrix is not square, or its order is not a power of two of at least 2.
    #[error("Invalid matrix shape ({rows} rows): {detail}")]
    InvalidShape { rows: usize, detail: String },

    /// Huffman tree construction ran out of nodes. This is a bug.
    #[error("Huffman tree could not be built from an empty alphabet")]
    EmptyAlphabet,

    /// A symbol (or index) was not found in a move-to-front alphabet.
    #[error("Symbol {0:?} is not in the move-to-front alphabet")]
    AlphabetConsistency(char),

    /// A move-to-front index fell outside the alphabet while decoding.
    #[error("Move-to-front index {index} is outside an alphabet of {len} symbols")]
    AlphabetIndex { index: usize, len: usize },

    /// A BWT primary index that does not address a row of the rotation table.
    #[error("BWT key {index} is out of range for {len} symbols")]
    InvalidIndex { index: usize, len: usize },

    /// I/O failures while loading input or persisting a report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
