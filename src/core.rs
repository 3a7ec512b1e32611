//======================================================================
// src/core.rs
// Cipher context and key schedule.
//======================================================================

use crate::backends;
use crate::consts::{P, S, SBOX_COUNT, SBOX_ENTRIES, SUBKEYS};
use crate::error::{check_key_len, Error};
use log::debug;

#[cfg(feature = "zeroize")]
use zeroize::ZeroizeOnDrop;

/// Which way [`Blowfish2::transform`] runs the Feistel network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Subkeys 0..=63 in ascending order, whitening with 64 and 65.
    Encrypt,
    /// Subkeys 65..=2 in descending order, whitening with 1 and 0.
    Decrypt,
}

/// A keyed Blowfish II context.
///
/// Holds the 66 subkeys and the eight 256-entry substitution tables derived
/// from the key. Every constructor runs the complete key schedule, so a
/// context is never observable in a partially keyed state. Encryption and
/// decryption borrow the context immutably and can share it across threads;
/// re-keying needs `&mut self`.
///
/// The context is about 17 KiB. With the `zeroize` feature (on by default)
/// it is wiped when dropped.
#[derive(Clone)]
#[cfg_attr(feature = "zeroize", derive(ZeroizeOnDrop))]
pub struct Blowfish2 {
    /// Round subkeys followed by the two whitening words.
    pub(crate) p: [u64; SUBKEYS],
    /// Key-dependent substitution tables.
    pub(crate) s: [[u64; SBOX_ENTRIES]; SBOX_COUNT],
}

impl Blowfish2 {
    /// Creates a context keyed with `key`.
    ///
    /// Keys of 1 to 528 bytes are accepted. Keys shorter than 528 bytes are
    /// repeated cyclically, so `b"ab"` and `b"abab"` produce the same context.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidKeyLength`] if `key` is empty or longer than 528 bytes.
    pub fn with_key(key: &[u8]) -> Result<Self, Error> {
        check_key_len(key.len())?;
        let mut cipher = Self::init_state();
        cipher.expand_key(key);
        Ok(cipher)
    }

    /// Re-keys this context in place.
    ///
    /// The previous key leaves no trace: the schedule restarts from the seed
    /// tables. On error the context is left untouched.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidKeyLength`] if `key` is empty or longer than 528 bytes.
    pub fn set_key(&mut self, key: &[u8]) -> Result<(), Error> {
        check_key_len(key.len())?;
        self.expand_key(key);
        Ok(())
    }

    /// Encrypts one block given as its left and right 64-bit halves.
    #[inline]
    pub fn encrypt(&self, left: u64, right: u64) -> (u64, u64) {
        let [l, r] = backends::encrypt(self, [left, right]);
        (l, r)
    }

    /// Decrypts one block given as its left and right 64-bit halves.
    #[inline]
    pub fn decrypt(&self, left: u64, right: u64) -> (u64, u64) {
        let [l, r] = backends::decrypt(self, [left, right]);
        (l, r)
    }

    /// Runs the block transform in place in the given direction.
    #[inline]
    pub fn transform(&self, direction: Direction, left: &mut u64, right: &mut u64) {
        let block = [*left, *right];
        let [l, r] = match direction {
            Direction::Encrypt => backends::encrypt(self, block),
            Direction::Decrypt => backends::decrypt(self, block),
        };
        *left = l;
        *right = r;
    }

    /// Encrypts a `[left, right]` word pair in place.
    #[inline]
    pub fn encrypt_words(&self, block: &mut [u64; 2]) {
        *block = backends::encrypt(self, *block);
    }

    /// Decrypts a `[left, right]` word pair in place.
    #[inline]
    pub fn decrypt_words(&self, block: &mut [u64; 2]) {
        *block = backends::decrypt(self, *block);
    }

    /// Context holding the unmodified seed tables.
    pub(crate) fn init_state() -> Self {
        Self { p: P, s: S }
    }

    /// Runs the key schedule. `key` must be non-empty.
    pub(crate) fn expand_key(&mut self, key: &[u8]) {
        self.s = S;

        // Big-endian words over the key repeated cyclically.
        let mut key_bytes = key.iter().copied().cycle();
        for (subkey, seed) in self.p.iter_mut().zip(P) {
            let word = (0..8).fold(0u64, |acc, _| {
                (acc << 8) | u64::from(key_bytes.next().unwrap_or_default())
            });
            *subkey = seed ^ word;
        }

        let mut block = [0u64; 2];
        for i in (0..SUBKEYS).step_by(2) {
            block = backends::encrypt(self, block);
            self.p[i] = block[0];
            self.p[i + 1] = block[1];
        }
        for table in 0..SBOX_COUNT {
            for j in (0..SBOX_ENTRIES).step_by(2) {
                block = backends::encrypt(self, block);
                self.s[table][j] = block[0];
                self.s[table][j + 1] = block[1];
            }
        }

        debug!(
            "blowfish2: key schedule done ({} key bytes, {} block encryptions)",
            key.len(),
            (SUBKEYS + SBOX_COUNT * SBOX_ENTRIES) / 2
        );
    }
}
