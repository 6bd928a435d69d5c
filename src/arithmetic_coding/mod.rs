//! The arithmetic_coding module encodes a whole message as one number inside nested sub-intervals
//! of [0, 1).
//!
//! All arithmetic is done with exact rationals. Probabilities sum to exactly one and the width of
//! the final interval is exactly the product of the symbol probabilities. Decimal digits only
//! appear when values are written out for a report.
//!
pub mod arithmetic;
