// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! NH universal hash.
//!
//! NH is the ε-almost-universal hash Adiantum uses as its mixing layer. It
//! combines message words with a long key through paired multiply-accumulate
//! passes and is not a cryptographic hash on its own: security comes from the
//! layer it is composed with.
//!
//! This crate implements the Adiantum parameter set: pair stride 2, 64
//! strides and 4 passes, i.e. messages of up to 1024 bytes hashed to 32 bytes
//! under a 1072-byte key. All integers are little-endian.
//!
//! ```
//! use nhpoly_nh::{Nh, NH_HASH_BYTES, NH_KEY_BYTES};
//!
//! let nh = Nh::new(&[0u8; NH_KEY_BYTES]).expect("key has the right length");
//! let hash = nh.hash(&[0u8; 32]).expect("message is a multiple of 16 bytes");
//! assert_eq!(hash, [0u8; NH_HASH_BYTES]);
//! ```
//!
//! References:
//! - Adiantum: length-preserving encryption for entry-level processors
//!   <https://doi.org/10.13154/tosc.v2018.i4.39-61>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod consts;
mod error;
mod key;
mod nh;

pub use consts::{
    NH_HASH_BYTES, NH_KEY_BYTES, NH_KEY_DWORDS, NH_MESSAGE_BYTES, NH_MESSAGE_DWORDS,
    NH_MESSAGE_UNIT, NH_NUM_PASSES, NH_NUM_STRIDES, NH_PAIR_STRIDE,
};
pub use error::NhError;
pub use key::NhKey;
pub use nh::{Nh, nh};
