// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// NH error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NhError {
    /// Key is not exactly `NH_KEY_BYTES` long
    #[error("invalid NH key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Required key length in bytes
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// Message is empty, not a multiple of `NH_MESSAGE_UNIT`, or longer than
    /// `NH_MESSAGE_BYTES`
    #[error(
        "invalid NH message length {len}: must be a non-zero multiple of 16 bytes, at most 1024"
    )]
    InvalidMessageLength {
        /// Length that was supplied
        len: usize,
    },
}
