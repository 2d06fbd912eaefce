//! Tool dispatch
//!
//! Each `run_*` function is one complete pipeline:
//! read → parse/validate → compute → format → write file + print.
//! `run_tool` wraps argument parsing and maps every error to a message
//! and an exit code.

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use textbatch_core::{convert, count_words, parse_lines, ParsedLines, Summary};
use tracing::{debug, info};

use crate::cli::report::{
    conversion_footer, conversion_line, conversion_report, statistics_report, word_count_report,
};
use crate::cli::{
    parse_args, read_input, Error, Result, RunConfig, Tool, EXIT_FAILURE, EXIT_SUCCESS,
};

/// Exit code wrapper for CLI operations
pub type ExitCode = i32;

/// Run one tool end to end and return its exit code
///
/// This is the main entry point for the binaries. User-facing messages,
/// including fatal errors, go to `out`.
pub fn run_tool<I, W>(tool: Tool, args: I, config: &RunConfig, out: &mut W) -> ExitCode
where
    I: IntoIterator<Item = String>,
    W: Write,
{
    let result = parse_args(tool, args).and_then(|parsed| match tool {
        Tool::Statistics => run_statistics(&parsed.input, config, out),
        Tool::Conversion => run_conversion(&parsed.input, config, out),
        Tool::WordCount => run_word_count(&parsed.input, config, out),
    });

    let code = match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            debug!(tool = tool.binary_name(), error = ?e, "run failed");
            // Nothing left to report to if stdout itself is gone
            let _ = writeln!(out, "{e}");
            EXIT_FAILURE
        }
    };
    let _ = out.flush();
    code
}

/// Descriptive statistics over one number per line
pub fn run_statistics<W: Write>(input: &Path, config: &RunConfig, out: &mut W) -> Result<()> {
    let start = Instant::now();
    let text = read_input(input, Tool::Statistics)?;

    let parsed: ParsedLines<f64> = parse_lines(&text);
    for line in &parsed.invalid {
        writeln!(
            out,
            "Error in line {}: '{}' is not a valid number.",
            line.number, line.text
        )?;
    }

    let summary = Summary::from_samples(&parsed.values)?;
    let elapsed = start.elapsed();
    debug!(
        valid = summary.count,
        invalid = parsed.invalid.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        "computed statistics"
    );

    let report = statistics_report(&summary, elapsed);
    write_result_file(config, Tool::Statistics, &report)?;

    writeln!(out, "{report}")?;
    Ok(())
}

/// Binary and hexadecimal conversion of one integer per line
pub fn run_conversion<W: Write>(input: &Path, config: &RunConfig, out: &mut W) -> Result<()> {
    let start = Instant::now();
    let text = read_input(input, Tool::Conversion)?;

    let parsed: ParsedLines<i128> = parse_lines(&text);
    for line in &parsed.invalid {
        writeln!(
            out,
            "Error on line {}: '{}' not a valid number.",
            line.number, line.text
        )?;
    }

    let lines: Vec<String> = parsed
        .values
        .iter()
        .map(|&value| conversion_line(&convert(value)))
        .collect();
    let elapsed = start.elapsed();
    debug!(
        converted = lines.len(),
        invalid = parsed.invalid.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        "converted numbers"
    );

    write_result_file(config, Tool::Conversion, &conversion_report(&lines, elapsed))?;

    for line in &lines {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "\n{}", conversion_footer(elapsed))?;
    Ok(())
}

/// Word frequency over free text
pub fn run_word_count<W: Write>(input: &Path, config: &RunConfig, out: &mut W) -> Result<()> {
    let start = Instant::now();
    let text = read_input(input, Tool::WordCount)?;
    let counts = count_words(&text);
    let elapsed = start.elapsed();
    debug!(
        distinct = counts.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        "counted words"
    );

    let report = word_count_report(&counts, elapsed);
    write_result_file(config, Tool::WordCount, &report)?;

    write!(out, "{report}")?;
    Ok(())
}

/// Write `content` to the tool's fixed-name result file
fn write_result_file(config: &RunConfig, tool: Tool, content: &str) -> Result<()> {
    let path = config.output_path(tool);
    std::fs::write(&path, content).map_err(|source| Error::Write {
        path: path.display().to_string(),
        source,
    })?;
    info!(path = %path.display(), "wrote results");
    Ok(())
}
