// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Deserializer};

/// What the decoder does with a protocol marker byte that is neither
/// `0x00` (no arguments) nor `0x01` (arguments follow).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownMarkerPolicy {
    /// Fail decoding with an unknown-marker error.
    #[default]
    Reject,
    /// Decode the payload as if it carried no arguments.
    TreatAsEmpty,
}

impl UnknownMarkerPolicy {
    /// Parse a policy name. Accepts `reject`/`strict` and
    /// `empty`/`treat-as-empty`/`legacy`, case-insensitively, with `_` and `-`
    /// interchangeable.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "reject" | "strict" => Some(Self::Reject),
            "empty" | "treat-as-empty" | "legacy" => Some(Self::TreatAsEmpty),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::TreatAsEmpty => "empty",
        }
    }
}

impl<'de> Deserialize<'de> for UnknownMarkerPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_name(&s).ok_or_else(|| {
            serde::de::Error::custom(format!("unknown marker policy '{}'", s))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeConfig {
    /// Handling of unrecognized protocol marker bytes
    ///
    /// Env: CALLDATA_DECODE_UNKNOWN_MARKER
    /// Valid values: reject, empty
    /// Default: reject
    pub unknown_marker: UnknownMarkerPolicy,
}

impl DecodeConfig {
    pub fn lenient() -> Self {
        Self {
            unknown_marker: UnknownMarkerPolicy::TreatAsEmpty,
        }
    }
}
