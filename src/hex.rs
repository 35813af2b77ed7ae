//! Turns a captured C byte-array body into raw bytes.

use std::num::IntErrorKind;

/// Errors
#[derive(thiserror::Error, Debug)]
pub enum HexError {
    /// A list entry is not a hexadecimal integer
    #[error("invalid hex literal `{0}`")]
    InvalidDigit(String),
    /// A list entry denotes a value outside 0..=255
    #[error("hex literal `{0}` does not fit in a byte")]
    OutOfRange(String),
}

/// Parse a comma-separated hex byte list into bytes, in order.
///
/// Newlines and carriage returns are stripped first, so a literal split
/// across a line boundary re-joins before tokenizing. Empty tokens from
/// trailing commas or blank stretches are skipped.
pub fn parse_bytes(body: &str) -> Result<Vec<u8>, HexError> {
    let cleaned = body.replace(['\n', '\r'], "");
    cleaned
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(parse_token)
        .collect()
}

/// Parse one `0xNN`-style token. A bare `NN` and an upper-case `0X` prefix
/// are accepted too, as is an explicit sign ahead of the prefix.
fn parse_token(token: &str) -> Result<u8, HexError> {
    let (negative, body) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    let digits = body
        .strip_prefix("0x")
        .or_else(|| body.strip_prefix("0X"))
        .unwrap_or(body);

    // `from_str_radix` tolerates a stray leading `+`; any sign left at this
    // point sits after the prefix or doubles the one already stripped.
    if digits.starts_with(['+', '-']) {
        return Err(HexError::InvalidDigit(token.to_owned()));
    }

    let value = match u32::from_str_radix(digits, 16) {
        Ok(value) => value,
        // A longer-than-u32 literal still denotes a number; it is a range
        // problem, not a syntax one.
        Err(err) if matches!(err.kind(), IntErrorKind::PosOverflow) => {
            return Err(HexError::OutOfRange(token.to_owned()));
        }
        Err(_) => return Err(HexError::InvalidDigit(token.to_owned())),
    };

    if negative && value != 0 {
        return Err(HexError::OutOfRange(token.to_owned()));
    }
    u8::try_from(value).map_err(|_| HexError::OutOfRange(token.to_owned()))
}
