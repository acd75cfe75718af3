// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-order helpers shared by the nhpoly primitives.
//!
//! Every multi-byte integer crossing an nhpoly API (key words, message words,
//! output words) is little-endian. The helpers here assemble and split
//! integers with explicit shifts, so results never depend on the host byte
//! order or on reinterpreting memory.

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "test-utils")]
extern crate alloc;

#[cfg(feature = "test-utils")]
use alloc::{string::String, vec::Vec};

#[cfg(test)]
mod tests;

/// Generates `load_le*` / `store_le*` functions for an integer type.
macro_rules! impl_le_access {
    ($type:ty, $size:expr, $fn_load:ident, $fn_store:ident) => {
        #[doc = concat!("Reads the little-endian `", stringify!($type), "` stored at `bytes[offset..offset + ", stringify!($size), "]`.")]
        ///
        /// The offset does not need to be aligned.
        ///
        /// # Panics
        ///
        /// Panics if the range is out of bounds.
        #[inline(always)]
        pub fn $fn_load(bytes: &[u8], offset: usize) -> $type {
            let mut value: $type = 0;
            for (i, byte) in bytes[offset..offset + $size].iter().enumerate() {
                value |= (*byte as $type) << (8 * i);
            }
            value
        }

        #[doc = concat!("Writes `value` as a little-endian `", stringify!($type), "` into `bytes[offset..offset + ", stringify!($size), "]`.")]
        ///
        /// # Panics
        ///
        /// Panics if the range is out of bounds.
        #[inline(always)]
        pub fn $fn_store(value: $type, bytes: &mut [u8], offset: usize) {
            for (i, byte) in bytes[offset..offset + $size].iter_mut().enumerate() {
                *byte = (value >> (8 * i)) as u8;
            }
        }
    };
}

impl_le_access!(u32, 4, load_le32, store_le32);
impl_le_access!(u64, 8, load_le64, store_le64);

/// Parses a hexadecimal string into bytes.
///
/// The string must have an even number of characters and contain only
/// valid hexadecimal digits (0-9, a-f, A-F).
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or has odd length.
///
/// # Example
///
/// ```
/// use nhpoly_util::hex_to_bytes;
///
/// let bytes = hex_to_bytes("deadbeef");
/// assert_eq!(bytes, vec![0xde, 0xad, 0xbe, 0xef]);
/// ```
#[cfg(feature = "test-utils")]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    assert!(hex.len() % 2 == 0, "odd-length hex string");

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("invalid hex digit"))
        .collect()
}

/// Encodes bytes as a lowercase hexadecimal string.
///
/// Used to render mismatching outputs in test failure messages.
#[cfg(feature = "test-utils")]
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";

    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(DIGITS[(byte >> 4) as usize] as char);
        out.push(DIGITS[(byte & 0x0f) as usize] as char);
    }
    out
}

/// Builds `len` bytes where byte `i` is `(i * mul + add) mod 256`.
///
/// Known-answer tests use it to describe long keys and messages by two
/// parameters instead of kilobytes of hex.
#[cfg(feature = "test-utils")]
pub fn pattern_bytes(len: usize, mul: usize, add: usize) -> Vec<u8> {
    (0..len)
        .map(|i| (i.wrapping_mul(mul).wrapping_add(add) & 0xff) as u8)
        .collect()
}
