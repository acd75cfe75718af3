// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use nhpoly_util::{bytes_to_hex, hex_to_bytes, pattern_bytes};

use super::known_answer_vectors::test_vectors;
use super::reference::reference_nh;
use crate::{NH_KEY_BYTES, Nh};

/// A single NH known-answer test case
pub(crate) struct TestVector {
    /// Human-readable description
    pub description: &'static str,
    /// `(mul, add)` parameters of the key pattern
    pub key_pattern: (usize, usize),
    /// `(mul, add)` parameters of the message pattern
    pub message_pattern: (usize, usize),
    /// Message length in bytes
    pub message_len: usize,
    /// Expected hash (hex)
    pub hash: &'static str,
}

fn run_test_vector(tv: &TestVector) -> Result<(), String> {
    let key = pattern_bytes(NH_KEY_BYTES, tv.key_pattern.0, tv.key_pattern.1);
    let message = pattern_bytes(tv.message_len, tv.message_pattern.0, tv.message_pattern.1);
    let expected = hex_to_bytes(tv.hash);

    let nh = Nh::new(&key).map_err(|e| format!("{}: {}", tv.description, e))?;
    let hash = nh
        .hash(&message)
        .map_err(|e| format!("{}: {}", tv.description, e))?;

    if hash.as_slice() != expected.as_slice() {
        return Err(format!(
            "{}: hash mismatch\n  expected: {}\n  got:      {}",
            tv.description,
            tv.hash,
            bytes_to_hex(&hash)
        ));
    }

    if reference_nh(&key, &message) != hash {
        return Err(format!("{}: reference disagrees", tv.description));
    }

    Ok(())
}

#[test]
fn test_nh_known_answers() {
    let vectors = test_vectors();
    let failures: Vec<String> = vectors
        .iter()
        .filter_map(|tv| run_test_vector(tv).err())
        .collect();

    assert!(
        failures.is_empty(),
        "{} of {} NH vectors failed:\n{}",
        failures.len(),
        vectors.len(),
        failures.join("\n")
    );
}
