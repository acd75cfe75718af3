// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use nhpoly_util::load_le32;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{KEY_SIZE, NUM_POWERS};
use crate::limbs::{LIMB_MASK, Multiplier, carry, mul_columns};

/// Key-derived Poly1305 state: clamped `r`, its powers, and `s`.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub(crate) struct Poly1305Key {
    /// `powers[k - 1]` holds `r^k`.
    powers: [Multiplier; NUM_POWERS],
    /// Second key half as little-endian words, added at finalization.
    s: [u32; 4],
}

impl Poly1305Key {
    pub(crate) fn new(key: &[u8; KEY_SIZE]) -> Self {
        let mut state = Self::default();

        state.powers[0] = Multiplier::from_limbs(clamp(key));
        for k in 1..NUM_POWERS {
            let prev = state.powers[k - 1].limbs;
            state.powers[k] = Multiplier::from_limbs(carry(mul_columns(&prev, &state.powers[0])));
        }

        for (i, word) in state.s.iter_mut().enumerate() {
            *word = load_le32(key, 16 + 4 * i);
        }

        state
    }

    /// The clamped multiplier `r`.
    #[inline(always)]
    pub(crate) fn r(&self) -> &Multiplier {
        &self.powers[0]
    }

    /// `r^k` for `k` in `1..=NUM_POWERS`.
    #[inline(always)]
    pub(crate) fn power(&self, k: usize) -> &Multiplier {
        &self.powers[k - 1]
    }

    #[inline(always)]
    pub(crate) fn s(&self) -> &[u32; 4] {
        &self.s
    }
}

/// Splits the first key half into 26-bit limbs of `r` and clamps it.
///
/// Equivalent to `r & 0x0ffffffc0ffffffc0ffffffc0fffffff` followed by the
/// radix 2^26 split: the top four bits of every 32-bit word and the low two
/// bits of words 1..3 are cleared, so `r < 2^124`.
pub(crate) fn clamp(key: &[u8; KEY_SIZE]) -> [u32; 5] {
    [
        load_le32(key, 0) & LIMB_MASK,
        (load_le32(key, 3) >> 2) & 0x3ff_ff03,
        (load_le32(key, 6) >> 4) & 0x3ff_c0ff,
        (load_le32(key, 9) >> 6) & 0x3f0_3fff,
        (load_le32(key, 12) >> 8) & 0x00f_ffff,
    ]
}

impl core::fmt::Debug for Poly1305Key {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Poly1305Key {{ [protected] }}")
    }
}
