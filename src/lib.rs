//======================================================================
// src/lib.rs
// Crate entry point: public API, module layout and `cipher` trait glue.
//======================================================================
#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub use cipher; // Re-export cipher crate for downstream users

// --- Module declarations ---
pub mod consts;
pub mod error;

mod backends;
mod core;

pub use crate::core::{Blowfish2, Direction};
pub use crate::error::Error;

use cipher::{
    consts::{U16, U528},
    AlgorithmName, BlockCipher, InvalidLength, KeyInit, KeySizeUser,
};
use ::core::fmt;

/// 128-bit block as seen by the byte-oriented `cipher` traits.
///
/// Bytes 0..8 are the big-endian left half, bytes 8..16 the right half.
pub type Block = cipher::Block<Blowfish2>;

/// Full-length (528-byte) key. Shorter keys go through
/// [`KeyInit::new_from_slice`] or [`Blowfish2::with_key`].
pub type Key = cipher::Key<Blowfish2>;

impl KeySizeUser for Blowfish2 {
    type KeySize = U528;
}

impl KeyInit for Blowfish2 {
    fn new(key: &Key) -> Self {
        let mut cipher = Self::init_state();
        cipher.expand_key(key);
        cipher
    }

    /// Accepts any key of 1 to 528 bytes.
    fn new_from_slice(key: &[u8]) -> Result<Self, InvalidLength> {
        Self::with_key(key).map_err(|_| InvalidLength)
    }
}

impl BlockCipher for Blowfish2 {}

impl AlgorithmName for Blowfish2 {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Blowfish2")
    }
}

impl fmt::Debug for Blowfish2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Blowfish2 { ... }")
    }
}

cipher::impl_simple_block_encdec!(
    Blowfish2, U16, cipher, block,
    encrypt: {
        let words = read_words(block.get_in());
        write_words(backends::encrypt(cipher, words), block.get_out());
    }
    decrypt: {
        let words = read_words(block.get_in());
        write_words(backends::decrypt(cipher, words), block.get_out());
    }
);

#[inline(always)]
fn read_words(block: &Block) -> [u64; 2] {
    let (left, right) = block.split_at(8);
    let mut l = [0u8; 8];
    let mut r = [0u8; 8];
    l.copy_from_slice(left);
    r.copy_from_slice(right);
    [u64::from_be_bytes(l), u64::from_be_bytes(r)]
}

#[inline(always)]
fn write_words([l, r]: [u64; 2], block: &mut Block) {
    block[..8].copy_from_slice(&l.to_be_bytes());
    block[8..].copy_from_slice(&r.to_be_bytes());
}

// --- Test Module ---
#[cfg(test)]
mod tests;
