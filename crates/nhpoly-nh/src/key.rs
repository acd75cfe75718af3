// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use nhpoly_util::load_le32;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{NH_KEY_BYTES, NH_KEY_DWORDS};
use crate::error::NhError;

/// NH key schedule.
///
/// The raw key decoded into `NH_KEY_DWORDS` little-endian words. Built once
/// per key, immutable afterwards, zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct NhKey {
    words: [u32; NH_KEY_DWORDS],
}

impl NhKey {
    /// Decodes a raw `NH_KEY_BYTES` key into its word schedule.
    ///
    /// # Errors
    ///
    /// [`NhError::InvalidKeyLength`] if `key.len() != NH_KEY_BYTES`.
    pub fn new(key: &[u8]) -> Result<Self, NhError> {
        if key.len() != NH_KEY_BYTES {
            return Err(NhError::InvalidKeyLength {
                expected: NH_KEY_BYTES,
                actual: key.len(),
            });
        }

        let mut schedule = Self {
            words: [0; NH_KEY_DWORDS],
        };
        for (i, word) in schedule.words.iter_mut().enumerate() {
            *word = load_le32(key, 4 * i);
        }

        Ok(schedule)
    }

    #[inline(always)]
    pub(crate) fn words(&self) -> &[u32; NH_KEY_DWORDS] {
        &self.words
    }
}

impl core::fmt::Debug for NhKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "NhKey {{ [protected] }}")
    }
}
