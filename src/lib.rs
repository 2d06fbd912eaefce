//! textbatch: small batch text-processing tools
//!
//! Three independent command-line tools share this library:
//! - `compute-statistics` — mean, median, mode, variance, std-dev
//! - `convert-numbers` — decimal to binary / hexadecimal
//! - `word-count` — word frequency table
//!
//! The computations live in `textbatch-core`; this crate holds the CLI
//! plumbing (arguments, input, reports, dispatch, logging).

pub mod cli;

// Re-export the pure computations for convenience
pub use textbatch_core::{
    convert, count_words, parse_lines, Conversion, InvalidLine, ParsedLines, Summary, WordCounts,
};
