// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Poly1305 error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Poly1305Error {
    /// Key is not exactly `KEY_SIZE` bytes long
    #[error("invalid Poly1305 key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Required key length in bytes
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// Tag verification failed
    #[error("authentication failed: tag mismatch")]
    TagMismatch,
}
