// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zeroize::Zeroize;

use crate::{BLOCK_SIZE, KEY_SIZE, Poly1305, Poly1305Error, TAG_SIZE, poly1305, verify};

const RFC_KEY: [u8; KEY_SIZE] = [
    0x85, 0xd6, 0xbe, 0x78, 0x57, 0x55, 0x6d, 0x33, 0x7f, 0x44, 0x52, 0xfe, 0x42, 0xd5, 0x06, 0xa8,
    0x01, 0x03, 0x80, 0x8a, 0xfb, 0x0d, 0xb2, 0xfd, 0x4a, 0xbf, 0xf6, 0xaf, 0x41, 0x49, 0xf5, 0x1b,
];
const RFC_MESSAGE: &[u8] = b"Cryptographic Forum Research Group";
const RFC_TAG: [u8; TAG_SIZE] = [
    0xa8, 0x06, 0x1d, 0xc1, 0x30, 0x51, 0x36, 0xc6, 0xc2, 0x2b, 0x8b, 0xaf, 0x0c, 0x01, 0x27, 0xa9,
];

#[test]
fn test_new_rejects_short_key() {
    assert_eq!(
        Poly1305::new(&[0u8; KEY_SIZE - 1]).unwrap_err(),
        Poly1305Error::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: KEY_SIZE - 1,
        }
    );
}

#[test]
fn test_new_rejects_long_key() {
    assert_eq!(
        Poly1305::new(&[0u8; KEY_SIZE + 1]).unwrap_err(),
        Poly1305Error::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: KEY_SIZE + 1,
        }
    );
}

#[test]
fn test_one_shot_rejects_bad_key() {
    assert_eq!(
        poly1305(&[], b"message"),
        Err(Poly1305Error::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: 0,
        })
    );
}

#[test]
fn test_empty_message_yields_s() {
    let tag = poly1305(&RFC_KEY, &[]).expect("Failed to compute tag");

    assert_eq!(tag[..], RFC_KEY[16..]);
}

#[test]
fn test_empty_message_unmasked_is_zero() {
    let mac = Poly1305::from_key(&RFC_KEY);

    assert_eq!(mac.finalize_unmasked(), [0u8; TAG_SIZE]);
}

#[test]
fn test_zero_key_yields_zero_tag() {
    let key = [0u8; KEY_SIZE];

    assert_eq!(poly1305(&key, &[]), Ok([0u8; TAG_SIZE]));
    assert_eq!(poly1305(&key, &[0xab; 200]), Ok([0u8; TAG_SIZE]));
}

#[test]
fn test_new_and_from_key_agree() {
    let mut a = Poly1305::new(&RFC_KEY).expect("Failed to create context");
    let mut b = Poly1305::from_key(&RFC_KEY);

    a.update(RFC_MESSAGE);
    b.update(RFC_MESSAGE);

    assert_eq!(a.finalize(), RFC_TAG);
    assert_eq!(b.finalize(), RFC_TAG);
}

#[test]
fn test_partial_block_is_buffered() {
    let mut mac = Poly1305::from_key(&RFC_KEY);

    mac.update(&[0u8; BLOCK_SIZE + 1]);
    assert_eq!(mac.buffered(), 1);

    mac.update(&[0u8; BLOCK_SIZE - 1]);
    assert_eq!(mac.buffered(), 0);

    mac.update(&[0u8; 4 * BLOCK_SIZE + 5]);
    assert_eq!(mac.buffered(), 5);
}

#[test]
fn test_empty_update_is_noop() {
    let mut mac = Poly1305::from_key(&RFC_KEY);
    mac.update(&[]);
    mac.update(RFC_MESSAGE);
    mac.update(&[]);

    assert_eq!(mac.finalize(), RFC_TAG);
}

#[test]
fn test_verify_accepts_valid_tag() {
    assert_eq!(verify(&RFC_KEY, RFC_MESSAGE, &RFC_TAG), Ok(()));
}

#[test]
fn test_verify_rejects_flipped_bit() {
    for i in 0..TAG_SIZE {
        let mut tag = RFC_TAG;
        tag[i] ^= 0x01;

        assert_eq!(
            verify(&RFC_KEY, RFC_MESSAGE, &tag),
            Err(Poly1305Error::TagMismatch)
        );
    }
}

#[test]
fn test_verify_rejects_modified_message() {
    assert_eq!(
        verify(&RFC_KEY, b"Cryptographic Forum Research Grou", &RFC_TAG),
        Err(Poly1305Error::TagMismatch)
    );
}

#[test]
fn test_verify_rejects_wrong_tag_length() {
    assert_eq!(
        verify(&RFC_KEY, RFC_MESSAGE, &RFC_TAG[..TAG_SIZE - 1]),
        Err(Poly1305Error::TagMismatch)
    );
    assert_eq!(
        verify(&RFC_KEY, RFC_MESSAGE, &[]),
        Err(Poly1305Error::TagMismatch)
    );
}

#[test]
fn test_verify_reports_bad_key() {
    assert_eq!(
        verify(&RFC_KEY[..16], RFC_MESSAGE, &RFC_TAG),
        Err(Poly1305Error::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: 16,
        })
    );
}

#[test]
fn test_debug_is_redacted() {
    let mac = Poly1305::from_key(&RFC_KEY);

    assert_eq!(format!("{:?}", mac), "Poly1305 { [protected] }");
}

#[test]
fn test_zeroize_clears_state() {
    let mut mac = Poly1305::from_key(&RFC_KEY);
    mac.update(&RFC_MESSAGE[..20]);
    assert_ne!(mac.accumulator().limbs(), &[0; 5]);

    mac.zeroize();

    assert_eq!(mac.accumulator().limbs(), &[0; 5]);
    assert_eq!(mac.buffered(), 0);
    assert_eq!(mac.finalize(), [0u8; TAG_SIZE]);
}

#[test]
fn test_error_display() {
    let err = Poly1305Error::InvalidKeyLength {
        expected: 32,
        actual: 7,
    };

    assert_eq!(
        err.to_string(),
        "invalid Poly1305 key length: expected 32 bytes, got 7"
    );
    assert_eq!(
        Poly1305Error::TagMismatch.to_string(),
        "authentication failed: tag mismatch"
    );
}
