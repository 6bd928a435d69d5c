//! Plain text reports of each pipeline, ready to print or persist verbatim.
use crate::arithmetic_coding::arithmetic::{precision, to_decimal, ArithmeticOutput};
use crate::bwt_algorithms::bwt_sort::{rotation, BwtOutput};
use crate::huffman_coding::huffman::CodeTable;
use crate::tools::block_flatten::Matrix;
use crate::tools::mtf::MtfOutput;
use num_rational::BigRational;

/// Show a code table as `{sym: code, ...}` in symbol order.
fn format_codes(codes: &CodeTable<String>) -> String {
    let pairs = codes
        .iter()
        .map(|(sym, code)| format!("'{}': '{}'", sym, code))
        .collect::<Vec<String>>();
    format!("{{{}}}", pairs.join(", "))
}

/// Report for the flatten -> RLE -> Huffman pipeline.
pub fn matrix_report(
    matrix: &Matrix<String>,
    flat: &[String],
    rle: &str,
    bits: &str,
    codes: &CodeTable<String>,
) -> String {
    let mut lines = vec!["--- Matrix compression ---".to_string(), "Source matrix:".to_string()];
    lines.extend(matrix.rows.iter().map(|row| format!("  {}", row.join(" "))));
    lines.push(String::new());
    lines.push(format!("Flattened sequence:\n  {}", flat.join(" ")));
    lines.push(format!("\nRun-length encoding:\n  {}", rle));
    lines.push(format!("\nHuffman bit string:\n  {}", bits));
    lines.push(format!("\nHuffman codes:\n  {}", format_codes(codes)));
    lines.push(String::new());
    lines.join("\n")
}

/// Report for the BWT stage, listing every sorted rotation.
pub fn bwt_report(input: &str, out: &BwtOutput) -> String {
    let block = input.chars().collect::<Vec<char>>();
    let mut lines = vec![
        "--- Burrows-Wheeler Transform ---".to_string(),
        format!("Input: {}", input),
        "Sorted rotations:".to_string(),
    ];
    lines.extend(
        out.rotations
            .iter()
            .map(|&start| format!("  {}", rotation(&block, start))),
    );
    lines.push(format!("BWT result: {}", out.text));
    lines.push(format!("Key (row of the input): {}", out.key));
    lines.push(String::new());
    lines.join("\n")
}

/// Report for the MTF stage, one line per symbol.
pub fn mtf_report(input: &str, out: &MtfOutput) -> String {
    let mut lines = vec![
        "--- Move-To-Front ---".to_string(),
        format!("Input: {}", input),
        format!("Initial alphabet: {:?}", out.alphabet),
    ];
    lines.extend(out.steps.iter().map(|step| {
        format!(
            "Symbol '{}': index {}, alphabet {:?}",
            step.symbol, step.index, step.alphabet
        )
    }));
    lines.push(format!("\nMTF result: {:?}", out.indices));
    lines.push(String::new());
    lines.join("\n")
}

/// Report for arithmetic coding. Values are written with `max(min_digits, 2 * length)` digits.
pub fn arith_report(input: &str, out: &ArithmeticOutput, min_digits: usize) -> String {
    let digits = precision(out.model.total, min_digits);
    let dec = |v: &BigRational| to_decimal(v, digits);

    let mut lines = vec![
        "--- Arithmetic coding ---".to_string(),
        format!("Input: {}", input),
        format!("Precision: {} digits", digits),
        String::new(),
        "Symbol frequencies and probabilities:".to_string(),
    ];
    lines.extend(out.model.intervals.iter().map(|slot| {
        format!(
            "  '{}': {} / {} = {}",
            slot.symbol,
            slot.freq,
            out.model.total,
            dec(&slot.probability())
        )
    }));
    lines.push("\nSymbol intervals:".to_string());
    lines.extend(
        out.model
            .intervals
            .iter()
            .map(|slot| format!("  '{}': [{}, {})", slot.symbol, dec(&slot.low), dec(&slot.high))),
    );
    lines.push("\nStep by step:".to_string());
    lines.extend(out.steps.iter().map(|step| {
        format!(
            "  Symbol '{}': interval [{}, {})",
            step.symbol,
            dec(&step.low),
            dec(&step.high)
        )
    }));
    lines.push("\nFinal result:".to_string());
    lines.push(format!(
        "  Interval: [{}, {})",
        dec(&out.interval.low),
        dec(&out.interval.high)
    ));
    lines.push(format!("  Encoded value: {}", dec(&out.value)));
    lines.push(format!("  Exact value: {}", out.value));
    lines.push(String::new());
    lines.join("\n")
}
