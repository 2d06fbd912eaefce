//! Decimal to binary / hexadecimal conversion
//!
//! Digits come from repeated division, least significant first. Negative
//! values are folded into a 32-bit two's-complement range (`2^32 + n`)
//! before digit extraction.
//!
//! Known limitation: the fold only covers `-2^32 < n < 0`. Zero is
//! checked before folding, so `n <= -2^32` folds to a non-positive value
//! and yields an empty digit string. Values above `2^32 - 1` are written
//! at full width. Inputs are `i128`, so lines wider than that (about 39
//! digits) are rejected by the line parser rather than converted.

/// Width used for folding negative values
pub const FOLD_BITS: u32 = 32;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// One converted input value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub decimal: i128,
    pub binary: String,
    pub hexadecimal: String,
}

/// Convert a value to both bases
pub fn convert(decimal: i128) -> Conversion {
    Conversion {
        decimal,
        binary: to_binary(decimal),
        hexadecimal: to_hexadecimal(decimal),
    }
}

/// Base-2 digits, no prefix
pub fn to_binary(number: i128) -> String {
    to_base(number, 2)
}

/// Base-16 digits in upper case, no prefix
pub fn to_hexadecimal(number: i128) -> String {
    to_base(number, 16)
}

fn to_base(number: i128, radix: i128) -> String {
    if number == 0 {
        return "0".to_string();
    }

    let mut remaining = if number < 0 {
        (1i128 << FOLD_BITS) + number
    } else {
        number
    };

    let mut digits = Vec::new();
    while remaining > 0 {
        digits.push(HEX_DIGITS[(remaining % radix) as usize]);
        remaining /= radix;
    }
    digits.reverse();

    // digits are drawn from an ASCII table
    digits.into_iter().map(char::from).collect()
}
