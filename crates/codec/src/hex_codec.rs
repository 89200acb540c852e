// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integer <-> hex conversions shared by the encoder and decoder.
//!
//! Two padding rules exist on the wire:
//! - fixed width, used for lengths, counts and the gas limit;
//! - minimal even width, used for integer argument values.

use crate::error::EncodingError;
use primitive_types::U256;

/// Format `value` as lowercase hex, left-padded with zeros to exactly
/// `width` hex digits.
///
/// Fails when the value needs more than `width` digits.
pub fn to_fixed_width_hex(value: U256, width: usize) -> Result<String, EncodingError> {
    let digits = format!("{:x}", value);
    if digits.len() > width {
        return Err(EncodingError::ValueOutOfRange {
            value: value.to_string(),
            width,
        });
    }

    Ok(format!("{:0>width$}", digits, width = width))
}

/// Format `value` as lowercase hex with an even number of digits.
///
/// Zero encodes as `"00"`.
pub fn to_minimal_padded_hex(value: U256) -> String {
    zero_pad_if_odd(&format!("{:x}", value))
}

/// Prepend a single `0` nibble when `input` has an odd number of digits.
pub fn zero_pad_if_odd(input: &str) -> String {
    if input.len() % 2 == 1 {
        format!("0{}", input)
    } else {
        input.to_string()
    }
}

/// Parse a big-endian hex field of at most 16 digits.
///
/// Returns `None` on any non-hex character, including sign prefixes that
/// `u64::from_str_radix` would otherwise accept.
pub fn parse_be_hex_u64(digits: &[u8]) -> Option<u64> {
    if digits.is_empty() || digits.len() > 16 || !digits.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }

    let text = std::str::from_utf8(digits).ok()?;
    u64::from_str_radix(text, 16).ok()
}

/// Read a hex string (optionally `0x`-prefixed) as an unsigned big-endian
/// integer. Returns `None` for malformed hex or values wider than 256 bits.
pub fn hex_to_u256(hex_str: &str) -> Option<U256> {
    let hex_str = hex_str
        .strip_prefix("0x")
        .or_else(|| hex_str.strip_prefix("0X"))
        .unwrap_or(hex_str);
    let bytes = hex::decode(zero_pad_if_odd(hex_str)).ok()?;

    let first_significant = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    let significant = &bytes[first_significant..];
    if significant.len() > 32 {
        return None;
    }

    Some(U256::from_big_endian(significant))
}
