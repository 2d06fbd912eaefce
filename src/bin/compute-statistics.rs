//! compute-statistics — Descriptive statistics (mean, median, mode, variance, std-dev) over one number per line.
//!
//! Usage: compute-statistics fileWithData.txt

use textbatch::cli::{init_logging, run_tool, RunConfig, Tool};

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: {e:#}");
    }

    let code = run_tool(
        Tool::Statistics,
        std::env::args(),
        &RunConfig::default(),
        &mut std::io::stdout().lock(),
    );
    std::process::exit(code);
}
