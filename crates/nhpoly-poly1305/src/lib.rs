// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Poly1305 one-time authenticator.
//!
//! Evaluates the message, split into 16-byte coefficients, as a polynomial at
//! the clamped secret point `r` modulo 2^130 - 5, then adds the secret `s`
//! modulo 2^128. Arithmetic uses five 26-bit limbs so every product fits in a
//! `u64`.
//!
//! ```
//! use nhpoly_poly1305::{Poly1305, poly1305};
//!
//! let key = [0x42u8; 32];
//!
//! let mut mac = Poly1305::new(&key).expect("key is 32 bytes");
//! mac.update(b"Cryptographic Forum ");
//! mac.update(b"Research Group");
//! let tag = mac.finalize();
//!
//! assert_eq!(Ok(tag), poly1305(&key, b"Cryptographic Forum Research Group"));
//! ```
//!
//! A key must authenticate a single message. Contexts are consumed by
//! finalization and zeroized on drop.
//!
//! References:
//! - RFC 8439: ChaCha20 and Poly1305 for IETF Protocols
//!   <https://datatracker.ietf.org/doc/html/rfc8439>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod accumulator;
mod consts;
mod error;
mod key;
mod limbs;
mod mac;
mod poly1305;

pub use consts::{BLOCK_SIZE, KEY_SIZE, TAG_SIZE};
pub use error::Poly1305Error;
pub use mac::{poly1305, verify};
pub use poly1305::Poly1305;
