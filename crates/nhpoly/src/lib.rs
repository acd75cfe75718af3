// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Universal hash primitives from the Adiantum construction.
//!
//! - [`nh`]: the NH ε-almost-universal hash, 1072-byte key, messages of up to
//!   1024 bytes in 16-byte units, 32-byte output.
//! - [`poly1305`]: the Poly1305 one-time authenticator, 32-byte key, messages
//!   of any length, 16-byte tag.
//!
//! The two primitives are independent; neither composes the other.
//!
//! # Quick Start
//!
//! ```rust
//! use nhpoly::nh::{Nh, NH_KEY_BYTES};
//! use nhpoly::poly1305::{Poly1305, verify};
//!
//! let nh = Nh::new(&[7u8; NH_KEY_BYTES])?;
//! let digest = nh.hash(&[1u8; 64])?;
//!
//! let key = [9u8; 32];
//! let mut mac = Poly1305::new(&key)?;
//! mac.update(&digest);
//! let tag = mac.finalize();
//!
//! verify(&key, &digest, &tag)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Every context holding key material or intermediate state is zeroized when
//! dropped and prints as `[protected]` under `Debug`.

#![cfg_attr(not(test), no_std)]

pub use nhpoly_nh as nh;
pub use nhpoly_poly1305 as poly1305;
