//! textbatch-core: pure computations behind the textbatch tools
//!
//! Nothing in this crate touches the filesystem or prints. Callers hand in
//! already-read text and get plain values back.
//!
//! - `lines` — per-line parsing with invalid-line reporting
//! - `statistics` — mean, median, mode, population variance, std-dev
//! - `convert` — decimal to binary / hexadecimal by repeated division
//! - `words` — alphanumeric-run tokenizer and frequency table

pub mod convert;
pub mod lines;
pub mod statistics;
pub mod words;

pub use convert::{convert, to_binary, to_hexadecimal, Conversion, FOLD_BITS};
pub use lines::{parse_lines, InvalidLine, ParsedLines};
pub use statistics::{mean, median, modes, std_dev, variance, StatisticsError, Summary};
pub use words::{count_words, WordCounts};
