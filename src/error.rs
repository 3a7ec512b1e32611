//======================================================================
// src/error.rs
// Error type and key length validation.
//======================================================================
//! Error type for the Blowfish II library.

use thiserror::Error;

use crate::consts::{MAX_KEY_BYTES, MIN_KEY_BYTES};

/// Errors produced when keying a [`Blowfish2`](crate::Blowfish2) context.
///
/// Encryption and decryption of an already keyed context cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Key is empty or longer than 528 bytes (4224 bits).
    #[error("key length {len} is outside {min}..={max} bytes", min = MIN_KEY_BYTES, max = MAX_KEY_BYTES)]
    InvalidKeyLength {
        /// Length of the rejected key, in bytes.
        len: usize,
    },
}

/// Checks a key length against the accepted range.
pub(crate) fn check_key_len(len: usize) -> Result<(), Error> {
    if (MIN_KEY_BYTES..=MAX_KEY_BYTES).contains(&len) {
        Ok(())
    } else {
        Err(Error::InvalidKeyLength { len })
    }
}
