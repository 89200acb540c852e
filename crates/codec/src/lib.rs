// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Encoder and decoder for cross-chain call data.
//!
//! Call data names an endpoint, a gas limit and an optional list of
//! arguments. It travels as a `0x`-prefixed hex string:
//!
//! ```text
//! [name len: 4][name: utf-8][gas limit: 8][marker: 1]([count: 4]([len: 4][bytes])*)?
//! ```
//!
//! All integers are big-endian. The marker is `00` when no arguments follow
//! and `01` when they do.
//!
//! ```
//! use call_data_codec::{Argument, decode_call_data, encode_call_data};
//!
//! let call_data = encode_call_data(
//!     "testEndpoint",
//!     50_000,
//!     &[Argument::from(42u64), Argument::from("hello")],
//! )?;
//! let decoded = decode_call_data(&call_data).expect("valid call data");
//!
//! assert_eq!(decoded.endpoint_name, "testEndpoint");
//! assert_eq!(decoded.args, vec!["2a", "68656c6c6f"]);
//! # Ok::<(), call_data_codec::EncodingError>(())
//! ```

pub mod argument;
pub mod consts;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod hex_codec;
pub mod logging;
pub mod payload;

pub use argument::Argument;
pub use call_data_config::{DecodeConfig, UnknownMarkerPolicy};
pub use decoder::{decode_call_data, decode_call_data_with};
pub use encoder::{append_args, append_endpoint_name, append_gas_limit, encode_call_data};
pub use error::{DecodingError, EncodingError, Field};
pub use payload::{CallPayload, DecodedCallData};
pub use primitive_types::U256;
