//! word-count — Frequency of every distinct word in a text file.
//!
//! Usage: word-count fileWithData.txt

use textbatch::cli::{init_logging, run_tool, RunConfig, Tool};

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: {e:#}");
    }

    let code = run_tool(
        Tool::WordCount,
        std::env::args(),
        &RunConfig::default(),
        &mut std::io::stdout().lock(),
    );
    std::process::exit(code);
}
