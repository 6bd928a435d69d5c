use clap::{Parser, Subcommand};
use log::{debug, info};
use std::{fmt::Display, fmt::Formatter};

use super::matrix_in::CellMode;
use crate::arithmetic_coding::arithmetic::MIN_DIGITS;

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

/// Matrix, Bwt, Mtf, Arith
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Matrix,
    Bwt,
    Mtf,
    Arith,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Where the input text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Text(String),
    File(String),
}

/// Define the two output channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    File(String),
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::File(path) => write!(f, "file {}", path),
            Output::Stdout => write!(f, "stdout"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Opts {
    /// Which pipeline to run
    pub op_mode: Mode,
    /// Text, or the path of a text or matrix file
    pub input: Input,
    /// How matrix files are split into cells
    pub cell_mode: CellMode,
    /// Location where the report is sent
    pub output: Output,
    /// Verbosity of user information
    pub verbose: Verbosity,
    /// Minimum decimal digits when writing arithmetic coding values
    pub min_digits: usize,
}

impl Opts {
    pub fn new() -> Self {
        Self {
            op_mode: Mode::Bwt,
            input: Input::Text(String::new()),
            cell_mode: CellMode::Tokens,
            output: Output::Stdout,
            verbose: Verbosity::Errors,
            min_digits: MIN_DIGITS,
        }
    }
}

impl Default for Opts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Lossless compression primitives: block flattening, RLE, Huffman, BWT, MTF and arithmetic coding",
    long_about = None
)]
pub struct Args {
    #[clap(subcommand)]
    command: Command,

    /// Write the report to this file instead of stdout
    #[clap(short = 'o', long = "output", global = true)]
    output: Option<String>,

    /// Be verbose (a 2nd -v gives more, up to -vvvv)
    #[clap(short = 'v', long = "verbose", parse(from_occurrences), global = true)]
    verbose: u8,

    /// Suppress all log messages
    #[clap(short = 'q', long = "quiet", global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Flatten a square matrix file, then run-length and Huffman encode it
    Matrix {
        /// Matrix file, one row per line
        file: String,
        /// One character per cell instead of whitespace separated tokens
        #[clap(long)]
        chars: bool,
    },
    /// Burrows-Wheeler Transform followed by Move-To-Front
    Bwt(TextInput),
    /// Move-To-Front only
    Mtf(TextInput),
    /// Arithmetic coding
    Arith {
        #[clap(flatten)]
        input: TextInput,
        /// Minimum number of decimal digits in the report
        #[clap(long, default_value_t = MIN_DIGITS)]
        digits: usize,
    },
}

#[derive(clap::Args, Debug)]
struct TextInput {
    /// Text to encode
    #[clap(required_unless_present = "file")]
    text: Option<String>,
    /// Read the text from a file instead
    #[clap(short = 'f', long = "file", conflicts_with = "text")]
    file: Option<String>,
}

impl TextInput {
    fn into_input(self) -> Input {
        match (self.text, self.file) {
            (_, Some(path)) => Input::File(path),
            (Some(text), None) => Input::Text(text),
            (None, None) => Input::Text(String::new()),
        }
    }
}

impl From<Args> for Opts {
    fn from(args: Args) -> Self {
        let mut opts = Opts::new();
        match args.command {
            Command::Matrix { file, chars } => {
                opts.op_mode = Mode::Matrix;
                opts.input = Input::File(file);
                if chars {
                    opts.cell_mode = CellMode::Chars
                };
            }
            Command::Bwt(input) => {
                opts.op_mode = Mode::Bwt;
                opts.input = input.into_input();
            }
            Command::Mtf(input) => {
                opts.op_mode = Mode::Mtf;
                opts.input = input.into_input();
            }
            Command::Arith { input, digits } => {
                opts.op_mode = Mode::Arith;
                opts.input = input.into_input();
                opts.min_digits = digits;
            }
        }
        if let Some(path) = args.output {
            opts.output = Output::File(path)
        };
        opts.verbose = match (args.quiet, args.verbose) {
            (true, _) => Verbosity::Quiet,
            (false, 0) => Verbosity::Errors,
            (false, 1) => Verbosity::Warnings,
            (false, 2) => Verbosity::Info,
            (false, 3) => Verbosity::Debug,
            _ => Verbosity::Trace,
        };
        opts
    }
}

/// Parse the command line into our internal structure and set the log level.
pub fn opts_init() -> Opts {
    let opts = Opts::from(Args::parse());
    set_log_level(opts.verbose);

    // Below we report initialization status to the user
    info!("---- Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    debug!("Input is {:?}", opts.input);
    info!("Sending report to {}", opts.output);
    info!("---- Initialization End ----");
    opts
}

/// Set the log level
pub fn set_log_level(verbose: Verbosity) {
    match verbose {
        Verbosity::Quiet => log::set_max_level(log::LevelFilter::Off),
        Verbosity::Errors => log::set_max_level(log::LevelFilter::Error),
        Verbosity::Warnings => log::set_max_level(log::LevelFilter::Warn),
        Verbosity::Info => log::set_max_level(log::LevelFilter::Info),
        Verbosity::Debug => log::set_max_level(log::LevelFilter::Debug),
        Verbosity::Trace => log::set_max_level(log::LevelFilter::Trace),
    };
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(args: &[&str]) -> Opts {
        Opts::from(Args::parse_from(args))
    }

    #[test]
    fn cli_matrix_test() {
        let opts = parse(&["blockpack", "matrix", "m.txt", "--chars", "-vv"]);
        assert_eq!(opts.op_mode, Mode::Matrix);
        assert_eq!(opts.input, Input::File("m.txt".to_string()));
        assert_eq!(opts.cell_mode, CellMode::Chars);
        assert_eq!(opts.verbose, Verbosity::Info);
    }

    #[test]
    fn cli_text_test() {
        let opts = parse(&["blockpack", "bwt", "banana", "-o", "out.txt"]);
        assert_eq!(opts.op_mode, Mode::Bwt);
        assert_eq!(opts.input, Input::Text("banana".to_string()));
        assert_eq!(opts.output, Output::File("out.txt".to_string()));
        assert_eq!(opts.verbose, Verbosity::Errors);
    }

    #[test]
    fn cli_arith_test() {
        let opts = parse(&["blockpack", "arith", "--file", "in.txt", "--digits", "80", "-q"]);
        assert_eq!(opts.op_mode, Mode::Arith);
        assert_eq!(opts.input, Input::File("in.txt".to_string()));
        assert_eq!(opts.min_digits, 80);
        assert_eq!(opts.verbose, Verbosity::Quiet);
    }

    #[test]
    fn cli_missing_text_test() {
        assert!(Args::try_parse_from(["blockpack", "mtf"]).is_err());
    }
}
