//! Dual-mode run-length encoding of a flat symbol sequence.
//!
//! Runs of two or more identical symbols are written as a run token `<count>*<symbol>`. Anything
//! else is gathered into a literal token `-<length>(<symbols>)`, so non-repeating data does not pay
//! for a count on every symbol. Tokens are joined with `", "`.
//!
//! The literal length is the length in characters of the concatenated symbols.
use log::{debug, trace};
use std::fmt::Display;

/// Longest literal segment, in symbols.
const MAX_LITERAL: usize = 255;

/// Run-length encode the input. An empty input gives an empty string.
pub fn rle_encode<T: PartialEq + Display>(data: &[T]) -> String {
    let mut tokens: Vec<String> = Vec::new();
    let end = data.len();
    let mut idx = 0_usize;

    while idx < end {
        // Count the run starting here
        let run = data[idx..]
            .iter()
            .position(|sym| sym != &data[idx])
            .unwrap_or(end - idx);

        if run > 1 {
            trace!("Run of {} at {}", run, idx);
            tokens.push(format!("{}*{}", run, data[idx]));
            idx += run;
            continue;
        }

        // Not a run, so take symbols until one starts a run (or we hit the cap)
        let start = idx;
        while idx < end && (idx + 1 == end || data[idx + 1] != data[idx]) {
            idx += 1;
            if idx - start >= MAX_LITERAL {
                break;
            }
        }
        let segment = data[start..idx]
            .iter()
            .map(|sym| sym.to_string())
            .collect::<String>();
        trace!("Literal of {} symbols at {}", idx - start, start);
        tokens.push(format!("-{}({})", segment.chars().count(), segment));
    }

    debug!("RLE wrote {} tokens for {} symbols", tokens.len(), end);
    tokens.join(", ")
}
