// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::argument::Argument;
use crate::encoder::encode_call_data;
use crate::error::EncodingError;
use crate::hex_codec::hex_to_u256;
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Input to the encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallPayload {
    pub endpoint_name: String,
    pub gas_limit: u64,
    pub args: Vec<Argument>,
}

impl CallPayload {
    pub fn new(endpoint_name: impl Into<String>, gas_limit: u64, args: Vec<Argument>) -> Self {
        Self {
            endpoint_name: endpoint_name.into(),
            gas_limit,
            args,
        }
    }

    pub fn encode(&self) -> Result<String, EncodingError> {
        encode_call_data(&self.endpoint_name, self.gas_limit, &self.args)
    }

    /// What decoding this payload's encoding yields.
    pub fn to_decoded(&self) -> DecodedCallData {
        DecodedCallData {
            endpoint_name: self.endpoint_name.clone(),
            gas_limit: self.gas_limit,
            args: self.args.iter().map(Argument::to_hex).collect(),
        }
    }
}

/// Output of the decoder. Arguments are the lowercase hex of their raw
/// bytes; interpreting them is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedCallData {
    pub endpoint_name: String,
    pub gas_limit: u64,
    pub args: Vec<String>,
}

impl DecodedCallData {
    /// Read argument `index` as an unsigned big-endian integer.
    pub fn arg_as_integer(&self, index: usize) -> Option<U256> {
        self.args.get(index).and_then(|arg| hex_to_u256(arg))
    }

    /// Read argument `index` as UTF-8 text.
    pub fn arg_as_text(&self, index: usize) -> Option<String> {
        let bytes = hex::decode(self.args.get(index)?).ok()?;
        String::from_utf8(bytes).ok()
    }
}
