use std::fs::{self, File};
use std::io::{self, Write};

use log::{debug, info};

use crate::arithmetic_coding::arithmetic::{arith_encode, ArithmeticOutput};
use crate::bwt_algorithms::bwt_sort::{bwt_encode, BwtOutput};
use crate::error::CodecError;
use crate::huffman_coding::huffman::{huf_encode, CodeTable};
use crate::tools::block_flatten::{flatten, Matrix};
use crate::tools::cli::{Input, Mode, Opts, Output};
use crate::tools::matrix_in::read_matrix;
use crate::tools::mtf::{mtf_encode, MtfOutput};
use crate::tools::report::{arith_report, bwt_report, matrix_report, mtf_report};
use crate::tools::rle::rle_encode;

/// Everything the matrix pipeline produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixOutcome {
    pub flat: Vec<String>,
    pub rle: String,
    pub bits: String,
    pub codes: CodeTable<String>,
    pub report: String,
}

/// Everything the BWT -> MTF pipeline produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOutcome {
    pub bwt: BwtOutput,
    pub mtf: MtfOutput,
    pub report: String,
}

/// Flatten the matrix, then feed the same flat sequence to RLE and to Huffman.
pub fn compress_matrix(matrix: &Matrix<String>) -> Result<MatrixOutcome, CodecError> {
    let flat = flatten(matrix)?;
    let rle = rle_encode(&flat);
    let (bits, codes) = huf_encode(&flat)?;
    debug!(
        "Matrix of {} cells: RLE is {} chars, Huffman is {} bits",
        flat.len(),
        rle.len(),
        bits.len()
    );
    let report = matrix_report(matrix, &flat, &rle, &bits, &codes);
    Ok(MatrixOutcome {
        flat,
        rle,
        bits,
        codes,
        report,
    })
}

/// BWT the text, then MTF the BWT output.
pub fn transform_text(text: &str) -> Result<TextOutcome, CodecError> {
    let bwt = bwt_encode(text);
    let mtf = mtf_encode(&bwt.text)?;
    let report = format!("{}\n{}", bwt_report(text, &bwt), mtf_report(&bwt.text, &mtf));
    Ok(TextOutcome { bwt, mtf, report })
}

/// MTF the text as given.
pub fn mtf_text(text: &str) -> Result<(MtfOutput, String), CodecError> {
    let mtf = mtf_encode(text)?;
    let report = mtf_report(text, &mtf);
    Ok((mtf, report))
}

/// Arithmetic code the text.
pub fn arith_text(text: &str, min_digits: usize) -> (ArithmeticOutput, String) {
    let out = arith_encode(text);
    let report = arith_report(text, &out, min_digits);
    (out, report)
}

/// Get the text input, reading it from a file if asked to. A single trailing newline is dropped.
fn load_text(input: &Input) -> Result<String, CodecError> {
    match input {
        Input::Text(text) => Ok(text.clone()),
        Input::File(path) => {
            let mut text = fs::read_to_string(path)?;
            if text.ends_with('\n') {
                text.pop();
                if text.ends_with('\r') {
                    text.pop();
                }
            }
            info!("Read {} symbols from {}", text.chars().count(), path);
            Ok(text)
        }
    }
}

/// Run the pipeline selected in opts and return its report.
pub fn run(opts: &Opts) -> Result<String, CodecError> {
    match opts.op_mode {
        Mode::Matrix => {
            let path = match &opts.input {
                Input::File(path) | Input::Text(path) => path,
            };
            let matrix = read_matrix(path, opts.cell_mode)?;
            Ok(compress_matrix(&matrix)?.report)
        }
        Mode::Bwt => Ok(transform_text(&load_text(&opts.input)?)?.report),
        Mode::Mtf => Ok(mtf_text(&load_text(&opts.input)?)?.1),
        Mode::Arith => Ok(arith_text(&load_text(&opts.input)?, opts.min_digits).1),
    }
}

/// Send the report to stdout or overwrite the output file with it.
pub fn write_report(output: &Output, report: &str) -> Result<(), CodecError> {
    match output {
        Output::Stdout => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(report.as_bytes())?;
            handle.flush()?;
        }
        Output::File(path) => {
            let mut f_out = File::create(path)?;
            f_out.write_all(report.as_bytes())?;
            info!("Wrote {} bytes of report to {}", report.len(), path);
        }
    }
    Ok(())
}
