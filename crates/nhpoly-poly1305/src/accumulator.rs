// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_SIZE, NUM_POWERS};
use crate::key::Poly1305Key;
use crate::limbs::{LIMB_MASK, Multiplier, block_limbs, carry, carry_limbs, mul_columns};

/// Running polynomial value `h` in five 26-bit limbs.
///
/// Invariant between blocks: h0, h2, h3, h4 <= 2^26 - 1 and h1 <= 2^26 + 63.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub(crate) struct Accumulator {
    h: [u32; 5],
}

impl Accumulator {
    /// `h = (h + block + hibit·2^128) · r  mod 2^130 - 5`
    ///
    /// `hibit` is 1 for a full block and 0 for the padded final block, whose
    /// `0x01` terminator already sits inside the 16 bytes.
    #[inline(always)]
    pub(crate) fn absorb_block(&mut self, r: &Multiplier, block: &[u8], hibit: u32) {
        let mut h = block_limbs(block, hibit);
        for (sum, limb) in h.iter_mut().zip(self.h) {
            *sum += limb;
        }

        self.h = carry(mul_columns(&h, r));
        h.zeroize();
    }

    /// Absorbs `NUM_POWERS` full blocks with one Horner step:
    ///
    /// ```text
    /// h = (h + m1)·r^4 + m2·r^3 + m3·r^2 + m4·r
    /// ```
    ///
    /// Equal to four calls to [`Self::absorb_block`] modulo 2^130 - 5.
    pub(crate) fn absorb_blocks(&mut self, key: &Poly1305Key, blocks: &[u8]) {
        debug_assert_eq!(blocks.len(), NUM_POWERS * BLOCK_SIZE);

        let mut d = [0u64; 5];

        for (i, block) in blocks.chunks_exact(BLOCK_SIZE).enumerate() {
            let mut m = block_limbs(block, 1);
            if i == 0 {
                for (sum, limb) in m.iter_mut().zip(self.h) {
                    *sum += limb;
                }
            }

            let columns = mul_columns(&m, key.power(NUM_POWERS - i));
            for (acc, column) in d.iter_mut().zip(columns) {
                *acc += column;
            }
            m.zeroize();
        }

        // Four summed products can carry well over 63 into h1; a second pass
        // restores the single-block bound.
        self.h = carry(carry(d).map(u64::from));
        d.zeroize();
    }

    /// Reduces `h` fully modulo 2^130 - 5 and returns its low 128 bits as
    /// four little-endian-ordered 32-bit words.
    pub(crate) fn reduce(&self) -> [u32; 4] {
        let mut h = self.h;

        carry_limbs(&mut h);
        carry_limbs(&mut h);

        // g = h + 5 - 2^130
        let mut g = [0u32; 5];
        g[0] = h[0] + 5;
        g[1] = h[1] + (g[0] >> 26);
        g[0] &= LIMB_MASK;
        g[2] = h[2] + (g[1] >> 26);
        g[1] &= LIMB_MASK;
        g[3] = h[3] + (g[2] >> 26);
        g[2] &= LIMB_MASK;
        g[4] = (h[4] + (g[3] >> 26)).wrapping_sub(1 << 26);
        g[3] &= LIMB_MASK;

        // All ones when g did not borrow, i.e. h >= p
        let mask = (g[4] >> 31).wrapping_sub(1);
        for (h_i, g_i) in h.iter_mut().zip(&g) {
            *h_i = (*h_i & !mask) | (*g_i & mask);
        }

        let words = [
            h[0] | (h[1] << 26),
            (h[1] >> 6) | (h[2] << 20),
            (h[2] >> 12) | (h[3] << 14),
            (h[3] >> 18) | (h[4] << 8),
        ];

        h.zeroize();
        g.zeroize();

        words
    }

    #[cfg(test)]
    pub(crate) fn limbs(&self) -> &[u32; 5] {
        &self.h
    }
}
