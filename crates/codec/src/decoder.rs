// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Call data decoder.
//!
//! Fields are read in the order the encoder writes them. The remaining input
//! is checked against each field's width before the field is sliced, so a
//! short or lying input fails with the name of the field it ran out in.

use crate::consts::{
    ARGUMENTS_MISSING_MARKER, ARGUMENTS_PRESENT_MARKER, HEX_PREFIX, MARKER_HEX_WIDTH,
    UINT32_HEX_WIDTH, UINT64_HEX_WIDTH,
};
use crate::error::{DecodingError, Field};
use crate::hex_codec::parse_be_hex_u64;
use crate::payload::DecodedCallData;
use call_data_config::{DecodeConfig, UnknownMarkerPolicy};

/// Read position inside the hex digits that follow the `0x` prefix.
struct Cursor<'a> {
    digits: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(digits: &'a [u8]) -> Self {
        Self { digits, offset: 0 }
    }

    fn remaining(&self) -> usize {
        self.digits.len() - self.offset
    }

    fn take(&mut self, field: Field, width: usize) -> Result<&'a [u8], DecodingError> {
        let available = self.remaining();
        if available < width {
            return Err(DecodingError::Truncated {
                field,
                needed: width,
                available,
            });
        }

        let slice = &self.digits[self.offset..self.offset + width];
        self.offset += width;
        Ok(slice)
    }

    fn take_uint(&mut self, field: Field, width: usize) -> Result<u64, DecodingError> {
        let slice = self.take(field, width)?;
        parse_be_hex_u64(slice).ok_or(DecodingError::InvalidHex { field })
    }

    /// Read a 4-byte length or count.
    fn take_uint32(&mut self, field: Field) -> Result<usize, DecodingError> {
        let value = self.take_uint(field, UINT32_HEX_WIDTH)?;
        usize::try_from(value).map_err(|_| DecodingError::Truncated {
            field,
            needed: usize::MAX,
            available: self.remaining(),
        })
    }

    /// Read `byte_len` raw bytes.
    fn take_bytes(&mut self, field: Field, byte_len: usize) -> Result<Vec<u8>, DecodingError> {
        let width = byte_len
            .checked_mul(2)
            .ok_or_else(|| DecodingError::Truncated {
                field,
                needed: usize::MAX,
                available: self.remaining(),
            })?;
        let slice = self.take(field, width)?;
        hex::decode(slice).map_err(|_| DecodingError::InvalidHex { field })
    }
}

/// Decode a call data string, rejecting unknown protocol markers.
pub fn decode_call_data(call_data: &str) -> Result<DecodedCallData, DecodingError> {
    decode_call_data_with(call_data, &DecodeConfig::default())
}

/// Decode a call data string under the given decoder configuration.
///
/// Any failure is logged and returned as a single error; data after the last
/// field is ignored.
pub fn decode_call_data_with(
    call_data: &str,
    config: &DecodeConfig,
) -> Result<DecodedCallData, DecodingError> {
    match decode_fields(call_data, config) {
        Ok(decoded) => {
            tracing::debug!(
                endpoint = %decoded.endpoint_name,
                gas_limit = decoded.gas_limit,
                args = decoded.args.len(),
                "Decoded call data"
            );
            Ok(decoded)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to decode call data");
            Err(e)
        }
    }
}

fn decode_fields(call_data: &str, config: &DecodeConfig) -> Result<DecodedCallData, DecodingError> {
    let digits = call_data
        .strip_prefix(HEX_PREFIX)
        .or_else(|| call_data.strip_prefix("0X"))
        .ok_or(DecodingError::MissingPrefix)?;
    let mut cursor = Cursor::new(digits.as_bytes());

    let name_len = cursor.take_uint32(Field::EndpointNameLength)?;
    let name_bytes = cursor.take_bytes(Field::EndpointName, name_len)?;
    let endpoint_name = String::from_utf8(name_bytes).map_err(|_| DecodingError::InvalidUtf8)?;

    let gas_limit = cursor.take_uint(Field::GasLimit, UINT64_HEX_WIDTH)?;

    let marker = cursor.take_uint(Field::ProtocolMarker, MARKER_HEX_WIDTH)? as u8;
    let args = match marker {
        ARGUMENTS_PRESENT_MARKER => decode_args(&mut cursor)?,
        ARGUMENTS_MISSING_MARKER => Vec::new(),
        unknown => match config.unknown_marker {
            UnknownMarkerPolicy::Reject => {
                return Err(DecodingError::UnknownProtocolMarker(unknown));
            }
            UnknownMarkerPolicy::TreatAsEmpty => {
                tracing::warn!(
                    marker = unknown,
                    "Unknown protocol marker, decoding without arguments"
                );
                Vec::new()
            }
        },
    };

    if cursor.remaining() > 0 {
        tracing::debug!(
            trailing_digits = cursor.remaining(),
            "Ignoring data after the last call data field"
        );
    }

    Ok(DecodedCallData {
        endpoint_name,
        gas_limit,
        args,
    })
}

fn decode_args(cursor: &mut Cursor<'_>) -> Result<Vec<String>, DecodingError> {
    let count = cursor.take_uint32(Field::ArgumentCount)?;

    // Every argument needs at least its length field, which bounds a lying count.
    let mut args = Vec::with_capacity(count.min(cursor.remaining() / UINT32_HEX_WIDTH));
    for _ in 0..count {
        let arg_len = cursor.take_uint32(Field::ArgumentLength)?;
        let arg_bytes = cursor.take_bytes(Field::ArgumentValue, arg_len)?;
        args.push(hex::encode(arg_bytes));
    }

    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYABLE_CALL_DATA: &str = "0x0000001563616c6c50617961626c6557697468506172616d730000000001312d000100000002000000012500000020fccb3543fe6585d4f89c1bd52151f44146d71de20a87e432a4fef733794308001";

    #[test]
    fn test_decode_call_data() {
        let result = decode_call_data(PAYABLE_CALL_DATA).unwrap();

        assert_eq!(result.endpoint_name, "callPayableWithParams");
        assert_eq!(result.gas_limit, 20_000_000);
        assert_eq!(
            result.args,
            vec![
                "25",
                "fccb3543fe6585d4f89c1bd52151f44146d71de20a87e432a4fef73379430800"
            ]
        );
    }

    #[test]
    fn test_decode_is_case_insensitive() {
        let upper = format!("0X{}", PAYABLE_CALL_DATA[2..].to_uppercase());
        let result = decode_call_data(&upper).unwrap();

        assert_eq!(result.endpoint_name, "callPayableWithParams");
        assert_eq!(
            result.args[1],
            "fccb3543fe6585d4f89c1bd52151f44146d71de20a87e432a4fef73379430800"
        );
    }

    #[test]
    fn test_decode_without_args() {
        let result = decode_call_data("0x0000000470696e67000000000000000a00").unwrap();
        assert_eq!(result.endpoint_name, "ping");
        assert_eq!(result.gas_limit, 10);
        assert!(result.args.is_empty());
    }

    #[test]
    fn test_decode_missing_prefix() {
        assert_eq!(
            decode_call_data(&PAYABLE_CALL_DATA[2..]),
            Err(DecodingError::MissingPrefix)
        );
        assert_eq!(decode_call_data(""), Err(DecodingError::MissingPrefix));
    }

    #[test]
    fn test_decode_truncated_fields() {
        let cases = [
            ("0x", Field::EndpointNameLength),
            ("0x00000004", Field::EndpointName),
            ("0x0000000470696e67", Field::GasLimit),
            ("0x0000000470696e67000000000000000a", Field::ProtocolMarker),
            ("0x0000000470696e67000000000000000a01", Field::ArgumentCount),
            ("0x0000000470696e67000000000000000a0100000001", Field::ArgumentLength),
            (
                "0x0000000470696e67000000000000000a010000000100000002ab",
                Field::ArgumentValue,
            ),
        ];

        for (input, field) in cases {
            let err = decode_call_data(input).unwrap_err();
            assert!(
                matches!(err, DecodingError::Truncated { field: f, .. } if f == field),
                "{} should fail in {}, got {:?}",
                input,
                field,
                err
            );
        }
    }

    #[test]
    fn test_decode_name_length_exceeds_input() {
        let err = decode_call_data("0xffffffff70696e67").unwrap_err();
        assert_eq!(
            err,
            DecodingError::Truncated {
                field: Field::EndpointName,
                needed: 0xffff_ffff * 2,
                available: 8,
            }
        );
    }

    #[test]
    fn test_decode_lying_argument_count() {
        let err = decode_call_data("0x0000000470696e67000000000000000a01ffffffff000000012a")
            .unwrap_err();
        assert_eq!(err.field(), Some(Field::ArgumentLength));
    }

    #[test]
    fn test_decode_invalid_hex() {
        let err = decode_call_data("0x0000000470696e6g000000000000000a00").unwrap_err();
        assert_eq!(
            err,
            DecodingError::InvalidHex {
                field: Field::EndpointName
            }
        );

        let err = decode_call_data("0x+0000004").unwrap_err();
        assert_eq!(
            err,
            DecodingError::InvalidHex {
                field: Field::EndpointNameLength
            }
        );
    }

    #[test]
    fn test_decode_non_ascii_input_does_not_panic() {
        assert!(decode_call_data("0x0000000470696e67é").is_err());
        assert!(decode_call_data("0xé").is_err());
    }

    #[test]
    fn test_decode_invalid_utf8_name() {
        let err = decode_call_data("0x00000001ff000000000000000a00").unwrap_err();
        assert_eq!(err, DecodingError::InvalidUtf8);
    }

    #[test]
    fn test_decode_unknown_marker_rejected_by_default() {
        let err = decode_call_data("0x0000000470696e67000000000000000a02").unwrap_err();
        assert_eq!(err, DecodingError::UnknownProtocolMarker(0x02));
    }

    #[test]
    fn test_decode_unknown_marker_lenient() {
        let result = decode_call_data_with(
            "0x0000000470696e67000000000000000a0200000001",
            &DecodeConfig::lenient(),
        )
        .unwrap();
        assert_eq!(result.endpoint_name, "ping");
        assert!(result.args.is_empty());
    }

    #[test]
    fn test_decode_ignores_trailing_data() {
        let result = decode_call_data("0x0000000470696e67000000000000000a00deadbeef").unwrap();
        assert!(result.args.is_empty());
    }
}
