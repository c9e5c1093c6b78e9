//! Numeric literal scanning.
//!
//! Handles decimal, `0x`/`0b`/`0o` (either case) integers with `_`
//! separators, and decimal floats of the form `digits.digits`. Integers
//! that overflow `u64` are kept as [`BigInt`] up to 1024 bits.


use fcx_diagnostic::ErrorCode;
use fcx_ir::{BigInt, BigIntError, TokenKind};

/// Why a numeric literal was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum NumberError {
    /// Radix prefix with no digits after it.
    MissingDigits { radix: u32 },
    Value(BigIntError),
}

impl NumberError {
    pub(crate) fn message(&self) -> String {
        match self {
            NumberError::MissingDigits { radix } => {
                let name = match radix {
                    16 => "hexadecimal",
                    8 => "octal",
                    _ => "binary",
                };
                format!("Expected {name} digits after radix prefix")
            }
            NumberError::Value(err) => err.to_string(),
        }
    }

    pub(crate) fn code(&self) -> ErrorCode {
        match self {
            NumberError::Value(BigIntError::TooLarge) => ErrorCode::E0005,
            NumberError::MissingDigits { .. } | NumberError::Value(_) => ErrorCode::E0006,
        }
    }
}

/// Result of scanning one literal.
#[derive(Debug, PartialEq)]
pub(crate) struct Number {
    /// Bytes consumed, prefix and separators included.
    pub(crate) len: usize,
    pub(crate) value: Result<TokenKind, NumberError>,
}

/// Scan a literal at the start of `input`, which must begin with an
/// ASCII digit.
pub(crate) fn scan(input: &[u8]) -> Number {
    let (radix, start) = match (input.first(), input.get(1)) {
        (Some(b'0'), Some(b'x' | b'X')) => (16, 2),
        (Some(b'0'), Some(b'b' | b'B')) => (2, 2),
        (Some(b'0'), Some(b'o' | b'O')) => (8, 2),
        _ => (10, 0),
    };

    let mut end = start + digit_run(&input[start..], radix);
    let body = &input[start..end];

    if radix != 10 && body.iter().all(|&b| b == b'_') {
        return Number {
            len: end,
            value: Err(NumberError::MissingDigits { radix }),
        };
    }

    if radix == 10
        && input.get(end) == Some(&b'.')
        && input.get(end + 1).is_some_and(u8::is_ascii_digit)
    {
        end += 1;
        end += digit_run(&input[end..], 10);
        return Number {
            len: end,
            value: Ok(float(&input[..end])),
        };
    }

    let digits = body.iter().filter(|&&b| b != b'_').filter_map(|&b| digit_value(b));
    let value = match BigInt::from_digits(radix, digits) {
        Ok(big) => Ok(match big.to_u64() {
            Some(small) => TokenKind::Int(small),
            None => TokenKind::BigInt(Box::new(big)),
        }),
        Err(err) => Err(NumberError::Value(err)),
    };
    Number { len: end, value }
}

/// Length of the run of `radix` digits and `_` separators.
fn digit_run(input: &[u8], radix: u32) -> usize {
    input
        .iter()
        .take_while(|&&b| b == b'_' || digit_value(b).is_some_and(|d| u32::from(d) < radix))
        .count()
}

#[inline]
fn digit_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

fn float(text: &[u8]) -> TokenKind {
    let cleaned: String = text
        .iter()
        .filter(|&&b| b != b'_')
        .map(|&b| char::from(b))
        .collect();
    // `digits.digits` always parses; a failure would be a scanner bug.
    let value = cleaned.parse::<f64>().unwrap_or(f64::NAN);
    TokenKind::Float(value.to_bits())
}
