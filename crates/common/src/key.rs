//! Secret byte containers: the AES-256 [`Key`] and the recovered [`Plaintext`].
//!
//! Both types overwrite their memory with zeroes on drop and never print
//! their contents through `Debug`.

use std::fmt;
use std::str::Utf8Error;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{DecryptError, KEY_LEN};

/// Fixed-size AES-256 key holding exactly [`KEY_LEN`] bytes.
///
/// Built from raw bytes only; hex decoding is the caller's job.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Key([u8; KEY_LEN]);

impl Key {
    /// Wrap an already-sized key.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Copy `bytes` into a new key.
    ///
    /// # Errors
    ///
    /// Returns [`DecryptError::InvalidKeyLength`] if `bytes` is not exactly
    /// [`KEY_LEN`] bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecryptError> {
        if bytes.len() != KEY_LEN {
            return Err(DecryptError::InvalidKeyLength(bytes.len()));
        }
        let mut key = Self([0u8; KEY_LEN]);
        key.0.copy_from_slice(bytes);
        Ok(key)
    }

    /// Borrow the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Key([REDACTED])")
    }
}

/// Decrypted, padding-stripped message bytes.
///
/// Only produced after the padding check has passed; the core never hands
/// out unvalidated bytes.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Plaintext(Vec<u8>);

impl Plaintext {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the plaintext as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`Utf8Error`] if the bytes are not valid UTF-8.
    pub fn to_utf8(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(&self.0)
    }
}

impl AsRef<[u8]> for Plaintext {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Plaintext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plaintext([REDACTED]; {} bytes)", self.0.len())
    }
}
