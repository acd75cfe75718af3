// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use nhpoly_util::store_le32;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::accumulator::Accumulator;
use crate::consts::{BLOCK_SIZE, KEY_SIZE, NUM_POWERS, TAG_SIZE};
use crate::error::Poly1305Error;
use crate::key::Poly1305Key;

/// Streaming Poly1305 state.
///
/// Feed the message with any number of [`update`](Self::update) calls, then
/// consume the state with [`finalize`](Self::finalize). The result does not
/// depend on how the message was split across calls.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Poly1305 {
    key: Poly1305Key,
    acc: Accumulator,
    buffer: [u8; BLOCK_SIZE],
    buffer_len: usize,
}

impl Poly1305 {
    /// Creates a state from a 32-byte one-time key `r || s`.
    ///
    /// # Errors
    ///
    /// [`Poly1305Error::InvalidKeyLength`] unless `key.len() == KEY_SIZE`.
    pub fn new(key: &[u8]) -> Result<Self, Poly1305Error> {
        let typed: &[u8; KEY_SIZE] =
            key.try_into()
                .map_err(|_| Poly1305Error::InvalidKeyLength {
                    expected: KEY_SIZE,
                    actual: key.len(),
                })?;

        Ok(Self::from_key(typed))
    }

    /// Creates a state from a 32-byte one-time key `r || s`.
    pub fn from_key(key: &[u8; KEY_SIZE]) -> Self {
        Self {
            key: Poly1305Key::new(key),
            acc: Accumulator::default(),
            buffer: [0; BLOCK_SIZE],
            buffer_len: 0,
        }
    }

    /// Absorbs the next message fragment.
    ///
    /// Whole blocks are processed immediately (four at a time where
    /// possible); a trailing partial block is buffered until more data
    /// arrives or the state is finalized.
    pub fn update(&mut self, data: &[u8]) {
        let mut data = data;

        if self.buffer_len > 0 {
            let take = core::cmp::min(BLOCK_SIZE - self.buffer_len, data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if self.buffer_len < BLOCK_SIZE {
                return;
            }

            self.acc.absorb_block(self.key.r(), &self.buffer, 1);
            self.buffer.zeroize();
            self.buffer_len = 0;
        }

        let mut wide = data.chunks_exact(NUM_POWERS * BLOCK_SIZE);
        for blocks in &mut wide {
            self.acc.absorb_blocks(&self.key, blocks);
        }

        let mut blocks = wide.remainder().chunks_exact(BLOCK_SIZE);
        for block in &mut blocks {
            self.acc.absorb_block(self.key.r(), block, 1);
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_len = rest.len();
    }

    /// Completes the computation and returns the tag
    /// `((h mod 2^130 - 5) + s) mod 2^128`.
    pub fn finalize(mut self) -> [u8; TAG_SIZE] {
        self.absorb_tail();

        let mut words = self.acc.reduce();
        let mut tag = [0u8; TAG_SIZE];
        let mut carry = 0u64;

        for (i, (word, s)) in words.iter().zip(self.key.s()).enumerate() {
            let sum = u64::from(*word) + u64::from(*s) + carry;
            store_le32(sum as u32, &mut tag, 4 * i);
            carry = sum >> 32;
        }

        words.zeroize();
        tag
    }

    /// Completes the computation without adding `s`, returning
    /// `(h mod 2^130 - 5) mod 2^128`.
    ///
    /// This is the hash form Adiantum applies its own mask to. Only the first
    /// half of the key influences the result.
    pub fn finalize_unmasked(mut self) -> [u8; TAG_SIZE] {
        self.absorb_tail();

        let mut words = self.acc.reduce();
        let mut out = [0u8; TAG_SIZE];

        for (i, word) in words.iter().enumerate() {
            store_le32(*word, &mut out, 4 * i);
        }

        words.zeroize();
        out
    }

    /// Pads the buffered partial block with `0x01` and zeros and absorbs it.
    fn absorb_tail(&mut self) {
        if self.buffer_len == 0 {
            return;
        }

        self.buffer[self.buffer_len] = 1;
        self.buffer[self.buffer_len + 1..].fill(0);
        self.acc.absorb_block(self.key.r(), &self.buffer, 0);

        self.buffer.zeroize();
        self.buffer_len = 0;
    }

    #[cfg(test)]
    pub(crate) fn accumulator(&self) -> &Accumulator {
        &self.acc
    }

    #[cfg(test)]
    pub(crate) fn buffered(&self) -> usize {
        self.buffer_len
    }
}

impl core::fmt::Debug for Poly1305 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Poly1305 {{ [protected] }}")
    }
}
