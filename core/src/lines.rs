//! Line-oriented parsing
//!
//! Each input line holds one value. Lines that do not parse are collected
//! as `InvalidLine`s instead of aborting, so callers can report and skip them.
//! `\n`, `\r\n` and a lone `\r` all end a line.

use std::str::FromStr;

use tracing::debug;

/// A line that failed to parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLine {
    /// 1-based line number
    pub number: usize,
    /// Line text with surrounding whitespace trimmed
    pub text: String,
}

/// Result of parsing every line of an input text
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLines<T> {
    /// Successfully parsed values, in input order
    pub values: Vec<T>,
    /// Rejected lines, in input order
    pub invalid: Vec<InvalidLine>,
}

impl<T> ParsedLines<T> {
    /// True when no line produced a value
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parse one value per line.
///
/// Blank lines are invalid. A trailing newline does not produce an extra line.
pub fn parse_lines<T: FromStr>(text: &str) -> ParsedLines<T> {
    let mut values = Vec::new();
    let mut invalid = Vec::new();

    for (index, line) in split_lines(text).into_iter().enumerate() {
        let trimmed = line.trim();
        match trimmed.parse::<T>() {
            Ok(value) => values.push(value),
            Err(_) => {
                debug!(line = index + 1, text = trimmed, "rejected input line");
                invalid.push(InvalidLine {
                    number: index + 1,
                    text: trimmed.to_string(),
                });
            }
        }
    }

    ParsedLines { values, invalid }
}

/// Split on `\n`, `\r\n` or a lone `\r`
fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_floats_skips_invalid() {
        let parsed: ParsedLines<f64> = parse_lines("1.5\nabc\n  2 \n\n3e2\n");
        assert_eq!(parsed.values, vec![1.5, 2.0, 300.0]);
        assert_eq!(
            parsed.invalid,
            vec![
                InvalidLine {
                    number: 2,
                    text: "abc".to_string()
                },
                InvalidLine {
                    number: 4,
                    text: String::new()
                },
            ]
        );
    }

    #[test]
    fn test_parse_integers_rejects_fractions() {
        let parsed: ParsedLines<i128> = parse_lines("10\n+7\n-3\n4.5\n");
        assert_eq!(parsed.values, vec![10, 7, -3]);
        assert_eq!(parsed.invalid.len(), 1);
        assert_eq!(parsed.invalid[0].number, 4);
        assert_eq!(parsed.invalid[0].text, "4.5");
    }

    #[test]
    fn test_parse_crlf_lines() {
        let parsed: ParsedLines<i128> = parse_lines("1\r\n2\r\n");
        assert_eq!(parsed.values, vec![1, 2]);
        assert!(parsed.invalid.is_empty());
    }

    #[test]
    fn test_parse_lone_carriage_return_lines() {
        let parsed: ParsedLines<f64> = parse_lines("1\r2\rx\r3\r");
        assert_eq!(parsed.values, vec![1.0, 2.0, 3.0]);
        assert_eq!(
            parsed.invalid,
            vec![InvalidLine {
                number: 3,
                text: "x".to_string()
            }]
        );
    }

    #[test]
    fn test_split_mixed_line_endings() {
        assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n\r\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\r\r"), vec!["a", ""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_parse_empty_text() {
        let parsed: ParsedLines<f64> = parse_lines("");
        assert!(parsed.is_empty());
        assert!(parsed.invalid.is_empty());
    }

    #[test]
    fn test_parse_underscore_grouping_is_invalid() {
        let parsed: ParsedLines<i128> = parse_lines("1_000\n");
        assert!(parsed.is_empty());
        assert_eq!(parsed.invalid[0].text, "1_000");
    }
}
