//! The on-disk `IV || ciphertext` blob exchanged between the encrypter and
//! the decrypter.
//!
//! # Format
//!
//! ```text
//! offset 0..16   : IV (16 raw bytes)
//! offset 16..end : ciphertext (N * 16 raw bytes, N >= 1)
//! ```
//!
//! There is no header, version tag, length prefix, or authentication tag.
//! The format is not self-describing and not tamper-evident; extending it
//! (e.g. with an HMAC) means changing this contract on both sides.

use thiserror::Error;

use crate::crypto::IV_LEN;

/// Errors produced while splitting a blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BlobError {
    /// Fewer bytes than a single IV.
    #[error("encrypted data is too short: {0} bytes, need at least {IV_LEN}")]
    TooShort(usize),
}

/// A parsed `IV || ciphertext` blob.
///
/// Ciphertext length is *not* checked here; block alignment is the
/// decryptor's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedBlob {
    iv: [u8; IV_LEN],
    ciphertext: Vec<u8>,
}

impl EncryptedBlob {
    pub fn new(iv: [u8; IV_LEN], ciphertext: Vec<u8>) -> Self {
        Self { iv, ciphertext }
    }

    /// Split raw file contents into IV and ciphertext.
    ///
    /// # Errors
    ///
    /// Returns [`BlobError::TooShort`] if `data` holds fewer than [`IV_LEN`] bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BlobError> {
        if data.len() < IV_LEN {
            return Err(BlobError::TooShort(data.len()));
        }
        let (iv_bytes, ciphertext) = data.split_at(IV_LEN);
        let mut iv = [0u8; IV_LEN];
        iv.copy_from_slice(iv_bytes);
        Ok(Self::new(iv, ciphertext.to_vec()))
    }

    /// Serialise back to `IV || ciphertext`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(IV_LEN + self.ciphertext.len());
        out.extend_from_slice(&self.iv);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    pub fn iv(&self) -> &[u8; IV_LEN] {
        &self.iv
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }
}
