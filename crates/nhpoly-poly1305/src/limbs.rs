// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Radix 2^26 arithmetic modulo 2^130 - 5.
//!
//! A 130-bit value is held as five `u32` limbs `x0 + x1·2^26 + ... + x4·2^104`.
//! Products are formed as five `u64` column sums and folded back into five
//! limbs using 2^130 ≡ 5.

use nhpoly_util::load_le32;
use zeroize::Zeroize;

/// Low 26 bits of a limb.
pub(crate) const LIMB_MASK: u32 = 0x3ff_ffff;

const LIMB_MASK_WIDE: u64 = LIMB_MASK as u64;

/// A multiplier in limb form, together with `5·x1..5·x4`.
///
/// The multiples fold the columns that overflow past 2^130 back into the low
/// columns without an extra multiplication per block.
#[derive(Default, Clone, Copy, Zeroize)]
pub(crate) struct Multiplier {
    pub(crate) limbs: [u32; 5],
    pub(crate) times5: [u32; 4],
}

impl Multiplier {
    pub(crate) fn from_limbs(limbs: [u32; 5]) -> Self {
        Self {
            limbs,
            times5: [limbs[1] * 5, limbs[2] * 5, limbs[3] * 5, limbs[4] * 5],
        }
    }
}

/// Splits a 16-byte block into five 26-bit limbs and ORs `hibit` in at bit 128.
///
/// The limbs start at bit offsets 0, 26, 52, 78 and 104, read as unaligned
/// little-endian words at byte offsets 0, 3, 6, 9 and 12.
#[inline(always)]
pub(crate) fn block_limbs(block: &[u8], hibit: u32) -> [u32; 5] {
    [
        load_le32(block, 0) & LIMB_MASK,
        (load_le32(block, 3) >> 2) & LIMB_MASK,
        (load_le32(block, 6) >> 4) & LIMB_MASK,
        (load_le32(block, 9) >> 6) & LIMB_MASK,
        (load_le32(block, 12) >> 8) | (hibit << 24),
    ]
}

/// Multiplies `h` by `r` without carrying.
///
/// ```text
///     r4       r3       r2       r1       r0
///  X  h4       h3       h2       h1       h0
///     ------ --------------------------------
///     h0*r4    h0*r3    h0*r2    h0*r1    h0*r0
///     h1*r3    h1*r2    h1*r1    h1*r0    h1*5*r4
///     h2*r2    h2*r1    h2*r0    h2*5*r4  h2*5*r3
///     h3*r1    h3*r0    h3*5*r4  h3*5*r3  h3*5*r2
///     h4*r0    h4*5*r4  h4*5*r3  h4*5*r2  h4*5*r1
/// ```
///
/// With `h` limbs at most 2^27 + 63 and `r` limbs at most 2^26 + 63 the
/// largest column (d0) stays below 2^58, so four such products can be summed
/// in a `u64`.
#[inline(always)]
pub(crate) fn mul_columns(h: &[u32; 5], r: &Multiplier) -> [u64; 5] {
    let [h0, h1, h2, h3, h4] = h.map(u64::from);
    let [r0, r1, r2, r3, r4] = r.limbs.map(u64::from);
    let [s1, s2, s3, s4] = r.times5.map(u64::from);

    [
        h0 * r0 + h1 * s4 + h2 * s3 + h3 * s2 + h4 * s1,
        h0 * r1 + h1 * r0 + h2 * s4 + h3 * s3 + h4 * s2,
        h0 * r2 + h1 * r1 + h2 * r0 + h3 * s4 + h4 * s3,
        h0 * r3 + h1 * r2 + h2 * r1 + h3 * r0 + h4 * s4,
        h0 * r4 + h1 * r3 + h2 * r2 + h3 * r1 + h4 * r0,
    ]
}

/// Carries column sums h0 -> h1 -> h2 -> h3 -> h4 -> h0 -> h1.
///
/// Stops once h1 is reached the second time. For the column sums of a single
/// block product this leaves h1 <= 2^26 + 63 and every other limb <= 2^26 - 1.
#[inline(always)]
pub(crate) fn carry(d: [u64; 5]) -> [u32; 5] {
    let [mut d0, mut d1, mut d2, mut d3, mut d4] = d;

    d1 += d0 >> 26;
    d0 &= LIMB_MASK_WIDE;
    d2 += d1 >> 26;
    d1 &= LIMB_MASK_WIDE;
    d3 += d2 >> 26;
    d2 &= LIMB_MASK_WIDE;
    d4 += d3 >> 26;
    d3 &= LIMB_MASK_WIDE;
    d0 += (d4 >> 26) * 5;
    d4 &= LIMB_MASK_WIDE;
    d1 += d0 >> 26;
    d0 &= LIMB_MASK_WIDE;

    [d0 as u32, d1 as u32, d2 as u32, d3 as u32, d4 as u32]
}

/// Carries limbs h1 -> h2 -> h3 -> h4 -> h0 -> h1.
///
/// Expects h0, h2, h3, h4 below 2^26. Afterwards h1 is at most 2^26; a second
/// call leaves every limb strictly below 2^26.
#[inline(always)]
pub(crate) fn carry_limbs(h: &mut [u32; 5]) {
    h[2] += h[1] >> 26;
    h[1] &= LIMB_MASK;
    h[3] += h[2] >> 26;
    h[2] &= LIMB_MASK;
    h[4] += h[3] >> 26;
    h[3] &= LIMB_MASK;
    h[0] += (h[4] >> 26) * 5;
    h[4] &= LIMB_MASK;
    h[1] += h[0] >> 26;
    h[0] &= LIMB_MASK;
}
