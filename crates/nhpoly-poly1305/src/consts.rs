// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Poly1305 sizes.

/// Key size in bytes (`r || s`)
pub const KEY_SIZE: usize = 32;

/// Block size in bytes
pub const BLOCK_SIZE: usize = 16;

/// Authentication tag size in bytes
pub const TAG_SIZE: usize = 16;

/// Number of precomputed powers of `r` (`r^1..r^4`)
pub(crate) const NUM_POWERS: usize = 4;
