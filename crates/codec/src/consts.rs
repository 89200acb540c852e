// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Wire format constants.
//!
//! Widths are given in hex digits, two per byte.

/// Prefix carried by every encoded call data string.
pub const HEX_PREFIX: &str = "0x";

/// Width of a 4-byte (uint32) length or count field.
pub const UINT32_HEX_WIDTH: usize = 8;

/// Width of the 8-byte (uint64) gas limit field.
pub const UINT64_HEX_WIDTH: usize = 16;

/// Width of the 1-byte protocol marker.
pub const MARKER_HEX_WIDTH: usize = 2;

/// Marker written when the payload carries no arguments.
pub const ARGUMENTS_MISSING_MARKER: u8 = 0x00;

/// Marker written when an argument count and entries follow.
pub const ARGUMENTS_PRESENT_MARKER: u8 = 0x01;

/// [`ARGUMENTS_MISSING_MARKER`] as it appears in call data.
pub const ARGUMENTS_MISSING_MARKER_HEX: &str = "00";
/// [`ARGUMENTS_PRESENT_MARKER`] as it appears in call data.
pub const ARGUMENTS_PRESENT_MARKER_HEX: &str = "01";
