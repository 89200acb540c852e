// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Call arguments.
//!
//! The wire format carries no type tag, so the caller decides up front whether
//! a value is an integer or text. [`Argument::infer`] exists for callers that
//! only hold strings and want the numeric-looking ones sent as integers.

use crate::error::EncodingError;
use crate::hex_codec::to_minimal_padded_hex;
use primitive_types::U256;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    /// Unsigned integer, written as its minimal big-endian bytes.
    Integer(U256),
    /// UTF-8 text, written as its raw bytes.
    Text(String),
}

impl Argument {
    /// Classify a string argument.
    ///
    /// ASCII decimal digits with an optional leading `+` become an
    /// [`Argument::Integer`]. Numbers that cannot be represented are rejected
    /// rather than sent as text: a leading `-` is a negative value, a `.` is a
    /// fractional value, more than 256 bits is out of range. Anything else is
    /// [`Argument::Text`]. Surrounding whitespace is not trimmed, so `" 42"`
    /// is text.
    pub fn infer(value: &str) -> Result<Self, EncodingError> {
        let (negative, unsigned) = match value.as_bytes().first() {
            Some(b'-') => (true, &value[1..]),
            Some(b'+') => (false, &value[1..]),
            _ => (false, value),
        };
        let (integer_part, fraction) = match unsigned.split_once('.') {
            Some((integer_part, fraction)) => (integer_part, Some(fraction)),
            None => (unsigned, None),
        };

        let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        let has_digits = !integer_part.is_empty() || fraction.is_some_and(|f| !f.is_empty());
        let numeric = has_digits && is_digits(integer_part) && fraction.is_none_or(is_digits);

        if !numeric {
            return Ok(Argument::Text(value.to_string()));
        }
        if negative {
            return Err(EncodingError::NegativeValue(value.to_string()));
        }
        if fraction.is_some() {
            return Err(EncodingError::FractionalValue(value.to_string()));
        }

        U256::from_dec_str(integer_part)
            .map(Argument::Integer)
            .map_err(|_| EncodingError::ValueOutOfRange {
                value: value.to_string(),
                width: 64,
            })
    }

    /// Lowercase hex of the bytes this argument occupies on the wire.
    pub fn to_hex(&self) -> String {
        match self {
            Argument::Integer(value) => to_minimal_padded_hex(*value),
            Argument::Text(text) => hex::encode(text.as_bytes()),
        }
    }

    /// Number of bytes this argument occupies on the wire.
    pub fn byte_len(&self) -> usize {
        match self {
            Argument::Integer(value) => value.bits().div_ceil(8).max(1),
            Argument::Text(text) => text.len(),
        }
    }
}

impl From<u64> for Argument {
    fn from(value: u64) -> Self {
        Argument::Integer(U256::from(value))
    }
}

impl From<u128> for Argument {
    fn from(value: u128) -> Self {
        Argument::Integer(U256::from(value))
    }
}

impl From<U256> for Argument {
    fn from(value: U256) -> Self {
        Argument::Integer(value)
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Argument::Text(value)
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Argument::Text(value.to_string())
    }
}

/// Read the literal text of a JSON number as an unsigned integer.
///
/// Exponent notation is accepted as long as the value is whole, so `1e21`
/// and `2.5e1` are integers while `2.5` is not.
fn integer_from_json_number(text: &str) -> Result<Argument, EncodingError> {
    if text.starts_with('-') {
        return Err(EncodingError::NegativeValue(text.to_string()));
    }

    let fractional = || EncodingError::FractionalValue(text.to_string());
    let out_of_range = || EncodingError::ValueOutOfRange {
        value: text.to_string(),
        width: 64,
    };

    let (mantissa, exponent) = match text.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (
            mantissa,
            exponent
                .trim_start_matches('+')
                .parse::<i64>()
                .map_err(|_| out_of_range())?,
        ),
        None => (text, 0),
    };
    let (integer_part, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let mut digits = format!("{}{}", integer_part, fraction);
    let mut scale = exponent.saturating_sub(fraction.len() as i64);
    while scale < 0 && digits.ends_with('0') {
        digits.pop();
        scale += 1;
    }
    if scale < 0 {
        return Err(fractional());
    }

    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(Argument::Integer(U256::zero()));
    }
    // U256::MAX has 78 decimal digits.
    if (digits.len() as i64).saturating_add(scale) > 78 {
        return Err(out_of_range());
    }

    let decimal = format!("{}{}", digits, "0".repeat(scale as usize));
    U256::from_dec_str(&decimal)
        .map(Argument::Integer)
        .map_err(|_| out_of_range())
}

/// Convert a loosely typed JSON value. Strings go through
/// [`Argument::infer`]; composite values are rejected.
impl TryFrom<&Value> for Argument {
    type Error = EncodingError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(number) => integer_from_json_number(&number.to_string()),
            Value::String(text) => Argument::infer(text),
            Value::Null => Err(EncodingError::UnsupportedArgument("null".to_string())),
            Value::Bool(_) => Err(EncodingError::UnsupportedArgument("boolean".to_string())),
            Value::Array(_) => Err(EncodingError::UnsupportedArgument("array".to_string())),
            Value::Object(_) => Err(EncodingError::UnsupportedArgument("object".to_string())),
        }
    }
}
