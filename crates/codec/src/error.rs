// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;
use thiserror::Error;

/// A field of the call data wire format, in the order it is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    EndpointNameLength,
    EndpointName,
    GasLimit,
    ProtocolMarker,
    ArgumentCount,
    ArgumentLength,
    ArgumentValue,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::EndpointNameLength => "endpoint-name-length",
            Field::EndpointName => "endpoint-name",
            Field::GasLimit => "gas-limit",
            Field::ProtocolMarker => "protocol-marker",
            Field::ArgumentCount => "argument-count",
            Field::ArgumentLength => "argument-length",
            Field::ArgumentValue => "argument-value",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("Value {value} does not fit in {width} hex digits")]
    ValueOutOfRange { value: String, width: usize },

    #[error("Negative values cannot be encoded: {0}")]
    NegativeValue(String),

    #[error("Fractional values cannot be encoded: {0}")]
    FractionalValue(String),

    #[error("Unsupported argument type: {0}")]
    UnsupportedArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodingError {
    #[error("Call data must start with '0x'")]
    MissingPrefix,

    #[error("Invalid {field}: needed {needed} hex digits, {available} available")]
    Truncated {
        field: Field,
        needed: usize,
        available: usize,
    },

    #[error("Invalid {field}: not a hex string")]
    InvalidHex { field: Field },

    #[error("Invalid endpoint name: not valid UTF-8")]
    InvalidUtf8,

    #[error("Unknown protocol marker 0x{0:02x}")]
    UnknownProtocolMarker(u8),
}

impl DecodingError {
    /// The wire field the error refers to, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            DecodingError::Truncated { field, .. } | DecodingError::InvalidHex { field } => {
                Some(*field)
            }
            DecodingError::InvalidUtf8 => Some(Field::EndpointName),
            DecodingError::UnknownProtocolMarker(_) => Some(Field::ProtocolMarker),
            DecodingError::MissingPrefix => None,
        }
    }
}
