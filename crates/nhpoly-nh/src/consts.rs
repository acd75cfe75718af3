// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! NH parameters (Adiantum variant).

/// Distance, in words, between the two halves of a multiplied pair.
pub const NH_PAIR_STRIDE: usize = 2;

/// Number of strides covered by one key schedule.
pub const NH_NUM_STRIDES: usize = 64;

/// Number of independent passes, each producing one 64-bit output word.
pub const NH_NUM_PASSES: usize = 4;

/// Maximum message length in 32-bit words.
pub const NH_MESSAGE_DWORDS: usize = NH_PAIR_STRIDE * 2 * NH_NUM_STRIDES;

/// Key schedule length in 32-bit words. Each extra pass shifts the key window
/// by one stride pair.
pub const NH_KEY_DWORDS: usize = NH_MESSAGE_DWORDS + NH_PAIR_STRIDE * 2 * (NH_NUM_PASSES - 1);

/// Messages are consumed in units of this many bytes.
pub const NH_MESSAGE_UNIT: usize = NH_PAIR_STRIDE * 8;

/// Maximum message length in bytes.
pub const NH_MESSAGE_BYTES: usize = NH_MESSAGE_DWORDS * 4;

/// Key length in bytes.
pub const NH_KEY_BYTES: usize = NH_KEY_DWORDS * 4;

/// Hash output length in bytes.
pub const NH_HASH_BYTES: usize = NH_NUM_PASSES * 8;

/// Key words consumed per message unit.
pub(crate) const NH_UNIT_DWORDS: usize = NH_MESSAGE_UNIT / 4;
