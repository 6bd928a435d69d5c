use crate::error::CodecError;
use log::{debug, info, trace};
use std::cmp::Ordering;

/// Output of [`bwt_encode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BwtOutput {
    /// The last column of the sorted rotation table.
    pub text: String,
    /// Row of the sorted table that holds the original text. Needed to reverse the transform.
    pub key: usize,
    /// Start offset of each rotation, in sorted order.
    pub rotations: Vec<usize>,
}

/// Burrows-Wheeler-Transform by sorting every cyclic rotation of the input.
/// Rotations are never materialized; an index of start offsets is sorted with a wraparound compare.
/// Equal rotations (periodic input) keep their offset order so the key is deterministic.
pub fn bwt_encode(data: &str) -> BwtOutput {
    let block = data.chars().collect::<Vec<char>>();
    let end = block.len();

    // Create index into block
    let mut index = (0..end).collect::<Vec<usize>>();
    index.sort_by(|a, b| block_compare(*a, *b, &block));

    // Get key and BWT output
    let mut key = 0;
    let mut bwt = String::with_capacity(data.len());
    for (row, &start) in index.iter().enumerate() {
        if start == 0 {
            key = row;
        }
        bwt.push(block[(start + end - 1) % end]);
    }

    info!("BWT of {} symbols, key is {}", end, key);
    trace!("BWT is: {}", bwt);
    BwtOutput {
        text: bwt,
        key,
        rotations: index,
    }
}

/// Convenience wrapper returning only the transformed string.
pub fn bwt(data: &str) -> String {
    bwt_encode(data).text
}

/// Spell out the rotation of `block` that starts at `start`.
pub fn rotation(block: &[char], start: usize) -> String {
    block[start..].iter().chain(block[..start].iter()).collect()
}

/// Compare two rotations of the block, chunk by chunk, wrapping around the end.
fn block_compare(a: usize, b: usize, block: &[char]) -> Ordering {
    let min = std::cmp::min(block[a..].len(), block[b..].len());

    // Lexicographical comparison up to the first end of block
    let mut result = block[a..a + min].cmp(&block[b..b + min]);

    // Implement wraparound if needed
    if result == Ordering::Equal {
        if a < b {
            let to_end = block.len() - a - min;
            result = block[(a + min)..].cmp(&block[..to_end]);
            if result == Ordering::Equal {
                let rest_of_block = block.len() - to_end - min;
                return block[..rest_of_block].cmp(&block[to_end..(to_end + rest_of_block)]);
            }
        } else {
            let to_end = block.len() - b - min;
            result = block[..to_end].cmp(&block[(b + min)..]);
            if result == Ordering::Equal {
                let rest_of_block = block.len() - to_end - min;
                return block[to_end..(to_end + rest_of_block)].cmp(&block[..rest_of_block]);
            }
        }
    }
    result
}

/// Decode a Burrows-Wheeler-Transform given the key reported by [`bwt_encode`].
pub fn bwt_decode(key: usize, bwt_in: &str) -> Result<String, CodecError> {
    let last = bwt_in.chars().collect::<Vec<char>>();
    let end = last.len();
    if end == 0 {
        return Ok(String::new());
    }
    if key >= end {
        return Err(CodecError::InvalidIndex {
            index: key,
            len: end,
        });
    }

    // The first column is the last column sorted. A stable sort keeps the n-th occurrence of each
    // symbol in the first column tied to its n-th occurrence in the last column.
    let mut t_vec = (0..end).collect::<Vec<usize>>();
    t_vec.sort_by_key(|&i| last[i]);

    // Follow the links to find the next character in the original data
    let mut out = String::with_capacity(bwt_in.len());
    let mut next = t_vec[key];
    for _ in 0..end {
        out.push(last[next]);
        next = t_vec[next];
    }
    debug!("BWT decoded {} symbols", end);
    Ok(out)
}
