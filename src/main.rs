//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use blockpack::compression::compress::{run, write_report};
use blockpack::tools::cli::opts_init;
use blockpack::CodecError;

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> Result<(), CodecError> {
    // Available log levels are Error, Warn, Info, Debug, Trace. Logs go to stderr so the report
    // can be piped from stdout.
    if TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Logger was already initialized");
    }

    let options = opts_init();

    //----- Figure how what we need to do and go do it
    let result = run(&options).and_then(|report| write_report(&options.output, &report));
    if let Err(e) = &result {
        error!("{}", e);
    }

    info!("Done.");
    result
}
