//! CLI argument parsing
//!
//! Every tool takes exactly one positional argument: the input file path.
//! Anything else is a usage error.

use std::path::PathBuf;

use crate::cli::{Error, Result, Tool};

/// Parsed CLI arguments
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// Input file path
    pub input: PathBuf,
}

/// Parse CLI arguments from std::env::args()
///
/// Grammar:
/// ```text
/// <tool> <input-file>
/// ```
pub fn parse_args<I: IntoIterator<Item = String>>(tool: Tool, args: I) -> Result<Args> {
    let mut iter = args.into_iter();
    let _program = iter.next(); // Skip program name

    match (iter.next(), iter.next()) {
        (Some(input), None) => Ok(Args {
            input: PathBuf::from(input),
        }),
        _ => Err(Error::Usage { tool }),
    }
}
