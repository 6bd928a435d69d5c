//! Move-To-Front transform of a (typically BWT) string.
//!
//! The alphabet starts as the sorted set of distinct characters in the input. Each character is
//! replaced by its current position in the alphabet and then moved to the front, so the runs of
//! identical characters that the BWT produces turn into runs of zeros.
use crate::error::CodecError;
use log::{debug, trace};

/// One step of the transform, kept for the audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MtfStep {
    pub symbol: char,
    pub index: usize,
    /// The alphabet as it was when the symbol was looked up.
    pub alphabet: Vec<char>,
}

/// Output of [`mtf_encode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MtfOutput {
    /// The sorted starting alphabet. Needed to reverse the transform.
    pub alphabet: Vec<char>,
    pub indices: Vec<usize>,
    pub steps: Vec<MtfStep>,
}

/// Build the starting alphabet: sorted, without duplicates.
pub fn initial_alphabet(data: &str) -> Vec<char> {
    let mut alphabet = data.chars().collect::<Vec<char>>();
    alphabet.sort_unstable();
    alphabet.dedup();
    alphabet
}

/// Encode data using the Move-To-Front transform. The result has one index per input character.
pub fn mtf_encode(data: &str) -> Result<MtfOutput, CodecError> {
    let alphabet = initial_alphabet(data);
    let mut mtf_index = alphabet.clone();
    let mut indices = Vec::with_capacity(data.len());
    let mut steps = Vec::with_capacity(data.len());

    for sym in data.chars() {
        let idx = mtf_index
            .iter()
            .position(|c| *c == sym)
            .ok_or(CodecError::AlphabetConsistency(sym))?;
        trace!("'{}' -> {} with alphabet {:?}", sym, idx, mtf_index);
        steps.push(MtfStep {
            symbol: sym,
            index: idx,
            alphabet: mtf_index.clone(),
        });
        indices.push(idx);

        // Nothing to move if it is already in front
        if idx > 0 {
            let moved = mtf_index.remove(idx);
            mtf_index.insert(0, moved);
        }
    }

    debug!(
        "MTF encoded {} symbols over an alphabet of {}, {} zeros",
        indices.len(),
        alphabet.len(),
        indices.iter().filter(|&&i| i == 0).count()
    );
    Ok(MtfOutput {
        alphabet,
        indices,
        steps,
    })
}

/// Reverse the Move-To-Front transform, given the starting alphabet.
pub fn mtf_decode(indices: &[usize], alphabet: &[char]) -> Result<String, CodecError> {
    let mut mtf_index = alphabet.to_vec();
    let mut out = String::with_capacity(indices.len());
    for &idx in indices {
        if idx >= mtf_index.len() {
            return Err(CodecError::AlphabetIndex {
                index: idx,
                len: mtf_index.len(),
            });
        }
        let sym = mtf_index.remove(idx);
        out.push(sym);
        mtf_index.insert(0, sym);
    }
    Ok(out)
}
