//! Result formatting
//!
//! Builds the exact text written to the result files. Floats use the
//! shortest round-trip form and always keep a fractional part (`3.0`).
//! Exponents carry a sign and at least two digits (`1e+16`, `2e-05`).

use std::time::Duration;

use textbatch_core::{Conversion, Summary, WordCounts};

/// Shortest round-trip float text, `3.0` rather than `3`
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    // `{:?}` switches to exponent form below 1e-4 and from 1e16 up
    let text = format!("{value:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}

/// Float list in bracketed form, `[1.0, 2.0]`
pub fn format_float_list(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().copied().map(format_float).collect();
    format!("[{}]", items.join(", "))
}

/// Statistics result file content
pub fn statistics_report(summary: &Summary, elapsed: Duration) -> String {
    format!(
        "Mean: {}\nMedian: {}\nMode: {}\nVariance: {}\nStandard Deviation: {}\nExecution Time: {:.2} seconds\n",
        format_float(summary.mean),
        format_float(summary.median),
        format_float_list(&summary.modes),
        format_float(summary.variance),
        format_float(summary.std_dev),
        elapsed.as_secs_f64(),
    )
}

/// One conversion result line (no newline)
pub fn conversion_line(conversion: &Conversion) -> String {
    format!(
        "Decimal: {}, Binary: {}, Hexadecimal: {}",
        conversion.decimal, conversion.binary, conversion.hexadecimal
    )
}

/// Conversion trailer line (no newline)
pub fn conversion_footer(elapsed: Duration) -> String {
    format!("Total execution time: {:.2} seconds", elapsed.as_secs_f64())
}

/// Conversion result file content
///
/// Lines are joined with `\n` and the footer follows after one more `\n`,
/// so an empty result set starts with a blank line.
pub fn conversion_report(lines: &[String], elapsed: Duration) -> String {
    format!("{}\n{}\n", lines.join("\n"), conversion_footer(elapsed))
}

/// Word count result content, identical for file and stdout
pub fn word_count_report(counts: &WordCounts, elapsed: Duration) -> String {
    let mut report = String::new();
    for (word, count) in counts {
        report.push_str(&format!("{word}: {count}\n"));
    }
    report.push_str(&format!(
        "\nExecution time: {:.4} seconds\n",
        elapsed.as_secs_f64()
    ));
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use textbatch_core::{convert, count_words};

    #[test]
    fn test_format_float_keeps_fraction() {
        assert_eq!(format_float(3.0), "3.0");
        assert_eq!(format_float(2.5), "2.5");
        assert_eq!(format_float(-0.125), "-0.125");
    }

    #[test]
    fn test_format_float_exponent_form() {
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1.5e16), "1.5e+16");
        assert_eq!(format_float(2e-5), "2e-05");
        assert_eq!(format_float(-3.5e-120), "-3.5e-120");
        assert_eq!(format_float(1e300), "1e+300");
    }

    #[test]
    fn test_format_float_non_finite() {
        assert_eq!(format_float(f64::NAN), "nan");
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_statistics_report_large_variance() {
        let summary = Summary::from_samples(&[1e8, 3e8]).unwrap();
        let report = statistics_report(&summary, Duration::ZERO);
        assert!(report.contains("Mean: 200000000.0\n"));
        assert!(report.contains("Variance: 1e+16\n"));
        assert!(report.contains("Mode: [100000000.0, 300000000.0]\n"));
    }

    #[test]
    fn test_format_float_list() {
        assert_eq!(format_float_list(&[1.0, 2.0]), "[1.0, 2.0]");
        assert_eq!(format_float_list(&[]), "[]");
    }

    #[test]
    fn test_statistics_report_layout() {
        let summary = Summary::from_samples(&[1.0, 1.0, 2.0]).unwrap();
        let report = statistics_report(&summary, Duration::from_millis(1234));
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("Mean: 1.333"));
        assert_eq!(lines[1], "Median: 1.0");
        assert_eq!(lines[2], "Mode: [1.0]");
        assert!(lines[3].starts_with("Variance: 0.222"));
        assert!(lines[4].starts_with("Standard Deviation: 0.471"));
        assert_eq!(lines[5], "Execution Time: 1.23 seconds");
        assert!(report.ends_with('\n'));
    }

    #[test]
    fn test_conversion_line() {
        assert_eq!(
            conversion_line(&convert(10)),
            "Decimal: 10, Binary: 1010, Hexadecimal: A"
        );
    }

    #[test]
    fn test_conversion_report_with_lines() {
        let lines = vec![conversion_line(&convert(0)), conversion_line(&convert(255))];
        let report = conversion_report(&lines, Duration::ZERO);
        assert_eq!(
            report,
            "Decimal: 0, Binary: 0, Hexadecimal: 0\n\
             Decimal: 255, Binary: 11111111, Hexadecimal: FF\n\
             Total execution time: 0.00 seconds\n"
        );
    }

    #[test]
    fn test_conversion_report_empty_starts_blank() {
        let report = conversion_report(&[], Duration::ZERO);
        assert_eq!(report, "\nTotal execution time: 0.00 seconds\n");
    }

    #[test]
    fn test_word_count_report() {
        let report = word_count_report(&count_words("Cat cat, dogs."), Duration::ZERO);
        assert_eq!(
            report,
            "cat: 2\ndogs: 1\n\nExecution time: 0.0000 seconds\n"
        );
    }

    #[test]
    fn test_word_count_report_empty() {
        let report = word_count_report(&count_words("?!"), Duration::from_micros(1500));
        assert_eq!(report, "\nExecution time: 0.0015 seconds\n");
    }
}
