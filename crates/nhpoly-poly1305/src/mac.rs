// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::consts::TAG_SIZE;
use crate::error::Poly1305Error;
use crate::poly1305::Poly1305;

/// Computes the Poly1305 tag of `message` under the one-time `key`.
///
/// # Errors
///
/// [`Poly1305Error::InvalidKeyLength`] unless `key` is 32 bytes.
pub fn poly1305(key: &[u8], message: &[u8]) -> Result<[u8; TAG_SIZE], Poly1305Error> {
    let mut mac = Poly1305::new(key)?;
    mac.update(message);
    Ok(mac.finalize())
}

/// Recomputes the tag of `message` and compares it with `tag` in constant time.
///
/// # Errors
///
/// - [`Poly1305Error::InvalidKeyLength`] unless `key` is 32 bytes.
/// - [`Poly1305Error::TagMismatch`] if `tag` differs (including in length).
pub fn verify(key: &[u8], message: &[u8], tag: &[u8]) -> Result<(), Poly1305Error> {
    let mut expected = poly1305(key, message)?;
    let matches: bool = expected[..].ct_eq(tag).into();
    expected.zeroize();

    if matches {
        Ok(())
    } else {
        Err(Poly1305Error::TagMismatch)
    }
}
