//! CLI module — shared plumbing for the three batch tools
//!
//! Provides:
//! - Argument parsing (exactly one input path)
//! - Input reading with per-cause fatal errors
//! - Result formatting and dual output (stdout + fixed-name result file)
//! - Tool dispatch and exit codes
//! - Logging initialisation

pub mod args;
pub mod dispatch;
pub mod input;
pub mod logging;
pub mod report;

use std::path::PathBuf;

// Re-exports
pub use args::{parse_args, Args};
pub use dispatch::{run_conversion, run_statistics, run_tool, run_word_count, ExitCode};
pub use input::read_input;
pub use logging::init_logging;

/// The three batch tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Descriptive statistics over one number per line
    Statistics,
    /// Decimal to binary/hexadecimal, one integer per line
    Conversion,
    /// Word frequency over free text
    WordCount,
}

impl Tool {
    /// Executable name, used in the usage line
    pub fn binary_name(self) -> &'static str {
        match self {
            Tool::Statistics => "compute-statistics",
            Tool::Conversion => "convert-numbers",
            Tool::WordCount => "word-count",
        }
    }

    /// Fixed result file name, written into the output directory
    pub fn output_file(self) -> &'static str {
        match self {
            Tool::Statistics => "StatisticsResults.txt",
            Tool::Conversion => "ConvertionResults.txt",
            Tool::WordCount => "WordCountResults.txt",
        }
    }

    fn missing_phrase(self) -> &'static str {
        match self {
            Tool::Statistics => "does not exist",
            Tool::Conversion => "is not found",
            Tool::WordCount => "was not found",
        }
    }
}

/// Where result files go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Directory receiving the fixed-name result file
    pub output_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

impl RunConfig {
    /// Full path of the result file for `tool`
    pub fn output_path(&self, tool: Tool) -> PathBuf {
        self.output_dir.join(tool.output_file())
    }
}

/// CLI errors
///
/// `Display` is the exact message shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Usage: {} fileWithData.txt", .tool.binary_name())]
    Usage { tool: Tool },

    #[error("Error: The file '{path}' {}.", .tool.missing_phrase())]
    NotFound { path: String, tool: Tool },

    #[error("Error: Permission denied to read '{path}'.")]
    PermissionDenied { path: String },

    #[error("Error reading the file: {0}")]
    Read(#[source] std::io::Error),

    #[error("Error writing '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing output: {0}")]
    Output(#[from] std::io::Error),

    #[error("No valid numbers found. Exiting.")]
    NoValidData,
}

impl From<textbatch_core::StatisticsError> for Error {
    fn from(err: textbatch_core::StatisticsError) -> Self {
        match err {
            textbatch_core::StatisticsError::NoData => Error::NoValidData,
        }
    }
}

/// Exit codes (deterministic)
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, Error>;
