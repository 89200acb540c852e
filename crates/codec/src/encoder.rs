// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Call data encoder.
//!
//! Each `append_*` step writes one section of the wire format as lowercase
//! hex into a caller-owned buffer. A step either writes its whole section or
//! leaves the buffer untouched.

use crate::argument::Argument;
use crate::consts::{
    ARGUMENTS_MISSING_MARKER_HEX, ARGUMENTS_PRESENT_MARKER_HEX, HEX_PREFIX, UINT32_HEX_WIDTH,
    UINT64_HEX_WIDTH,
};
use crate::error::EncodingError;
use crate::hex_codec::to_fixed_width_hex;
use primitive_types::U256;

fn uint32_hex(value: usize) -> Result<String, EncodingError> {
    to_fixed_width_hex(U256::from(value as u64), UINT32_HEX_WIDTH)
}

/// Append the 4-byte name length followed by the UTF-8 bytes of the name.
pub fn append_endpoint_name(buf: &mut String, endpoint_name: &str) -> Result<(), EncodingError> {
    let length_hex = uint32_hex(endpoint_name.len())?;
    buf.push_str(&length_hex);
    buf.push_str(&hex::encode(endpoint_name.as_bytes()));
    Ok(())
}

/// Append the 8-byte big-endian gas limit.
pub fn append_gas_limit(buf: &mut String, gas_limit: u64) -> Result<(), EncodingError> {
    let gas_limit_hex = to_fixed_width_hex(U256::from(gas_limit), UINT64_HEX_WIDTH)?;
    buf.push_str(&gas_limit_hex);
    Ok(())
}

/// Append the protocol marker and, when there are arguments, the argument
/// count and every length-prefixed argument.
///
/// An empty list is written as the `00` marker alone, with no count field.
pub fn append_args(buf: &mut String, args: &[Argument]) -> Result<(), EncodingError> {
    if args.is_empty() {
        buf.push_str(ARGUMENTS_MISSING_MARKER_HEX);
        return Ok(());
    }

    let mut section = String::from(ARGUMENTS_PRESENT_MARKER_HEX);
    section.push_str(&uint32_hex(args.len())?);

    for arg in args {
        section.push_str(&uint32_hex(arg.byte_len())?);
        section.push_str(&arg.to_hex());
    }

    buf.push_str(&section);
    Ok(())
}

/// Encode a complete `0x`-prefixed call data string.
pub fn encode_call_data(
    endpoint_name: &str,
    gas_limit: u64,
    args: &[Argument],
) -> Result<String, EncodingError> {
    let mut call_data = String::from(HEX_PREFIX);
    append_endpoint_name(&mut call_data, endpoint_name)?;
    append_gas_limit(&mut call_data, gas_limit)?;
    append_args(&mut call_data, args)?;

    tracing::debug!(
        endpoint = %endpoint_name,
        gas_limit,
        args = args.len(),
        bytes = (call_data.len() - HEX_PREFIX.len()) / 2,
        "Encoded call data"
    );

    Ok(call_data)
}
