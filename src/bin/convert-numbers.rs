//! convert-numbers — Decimal to binary and hexadecimal, one integer per line.
//!
//! Usage: convert-numbers fileWithData.txt

use textbatch::cli::{init_logging, run_tool, RunConfig, Tool};

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: {e:#}");
    }

    let code = run_tool(
        Tool::Conversion,
        std::env::args(),
        &RunConfig::default(),
        &mut std::io::stdout().lock(),
    );
    std::process::exit(code);
}
