use crate::domain::decimal::Decimal;
use crate::domain::model::LineKind;
use crate::utils::error::{FilterError, Result};
use num_bigint::BigInt;

/// Parses `[+-]digits` into a `BigInt`. Nothing else is accepted: no
/// whitespace, no digit separators, no radix prefixes.
pub fn parse_integer(line: &str) -> Result<BigInt> {
    let invalid = || FilterError::NumberFormatError {
        value: line.to_string(),
        kind: "integer",
    };

    let (negative, digits) = match line.as_bytes().first() {
        Some(b'-') => (true, &line[1..]),
        Some(b'+') => (false, &line[1..]),
        _ => (false, line),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
    Ok(if negative { -magnitude } else { magnitude })
}

pub fn is_integer(line: &str) -> bool {
    parse_integer(line).is_ok()
}

pub fn is_float(line: &str) -> bool {
    Decimal::parse(line).is_ok()
}

/// Integers are checked before floats, so `"42"` is never a float.
pub fn classify(line: &str) -> LineKind {
    if is_integer(line) {
        LineKind::Integer
    } else if is_float(line) {
        LineKind::Float
    } else {
        LineKind::Text
    }
}
