// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use nhpoly_util::{load_le32, store_le64};
use zeroize::Zeroize;

use crate::consts::{
    NH_HASH_BYTES, NH_MESSAGE_BYTES, NH_MESSAGE_UNIT, NH_NUM_PASSES, NH_PAIR_STRIDE,
    NH_UNIT_DWORDS,
};
use crate::error::NhError;
use crate::key::NhKey;

/// NH hashing context.
///
/// Holds the key schedule only; hashing borrows it immutably, so one context
/// can serve any number of messages (and threads).
#[derive(Debug)]
pub struct Nh {
    key: NhKey,
}

impl Nh {
    /// Builds a context from a raw `NH_KEY_BYTES` key.
    ///
    /// # Errors
    ///
    /// [`NhError::InvalidKeyLength`] if `key.len() != NH_KEY_BYTES`.
    pub fn new(key: &[u8]) -> Result<Self, NhError> {
        Ok(Self::with_key(NhKey::new(key)?))
    }

    /// Builds a context around an already decoded key schedule.
    pub fn with_key(key: NhKey) -> Self {
        Self { key }
    }

    /// Hashes `message` and returns the 32-byte NH output.
    ///
    /// # Errors
    ///
    /// [`NhError::InvalidMessageLength`] unless `message` is a non-zero
    /// multiple of `NH_MESSAGE_UNIT` bytes and at most `NH_MESSAGE_BYTES`.
    pub fn hash(&self, message: &[u8]) -> Result<[u8; NH_HASH_BYTES], NhError> {
        let mut out = [0u8; NH_HASH_BYTES];
        self.hash_into(message, &mut out)?;
        Ok(out)
    }

    /// Hashes `message` into `out`.
    ///
    /// `out` is left untouched on error.
    ///
    /// # Errors
    ///
    /// Same as [`Nh::hash`].
    pub fn hash_into(&self, message: &[u8], out: &mut [u8; NH_HASH_BYTES]) -> Result<(), NhError> {
        check_message_len(message.len())?;

        let key = self.key.words();
        let mut sums = [0u64; NH_NUM_PASSES];

        for (i, unit) in message.chunks_exact(NH_MESSAGE_UNIT).enumerate() {
            nh_unit(&key[i * NH_UNIT_DWORDS..], unit, &mut sums);
        }

        for (i, sum) in sums.iter().enumerate() {
            store_le64(*sum, out, 8 * i);
        }
        sums.zeroize();

        Ok(())
    }
}

/// One-shot NH: `Nh::new(key)?.hash(message)`.
///
/// # Errors
///
/// See [`Nh::new`] and [`Nh::hash`].
pub fn nh(key: &[u8], message: &[u8]) -> Result<[u8; NH_HASH_BYTES], NhError> {
    Nh::new(key)?.hash(message)
}

fn check_message_len(len: usize) -> Result<(), NhError> {
    if len == 0 || len % NH_MESSAGE_UNIT != 0 || len > NH_MESSAGE_BYTES {
        return Err(NhError::InvalidMessageLength { len });
    }
    Ok(())
}

/// Folds one 16-byte message unit into the four pass sums.
///
/// `key` starts at the unit's key window; pass `p` reads the four words at
/// offset `4p` of that window. Words are added mod 2^32, multiplied 32x32->64
/// and accumulated mod 2^64.
#[inline(always)]
fn nh_unit(key: &[u32], unit: &[u8], sums: &mut [u64; NH_NUM_PASSES]) {
    let m0 = load_le32(unit, 0);
    let m1 = load_le32(unit, 4);
    let m2 = load_le32(unit, 8);
    let m3 = load_le32(unit, 12);

    for (pass, sum) in sums.iter_mut().enumerate() {
        let k = &key[pass * NH_PAIR_STRIDE * 2..];

        *sum = sum
            .wrapping_add(mul32(m0.wrapping_add(k[0]), m2.wrapping_add(k[2])))
            .wrapping_add(mul32(m1.wrapping_add(k[1]), m3.wrapping_add(k[3])));
    }
}

#[inline(always)]
fn mul32(a: u32, b: u32) -> u64 {
    (a as u64) * (b as u64)
}
