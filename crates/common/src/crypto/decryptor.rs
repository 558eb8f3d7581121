//! AES-256-CBC decryption followed by PKCS7 unpadding.

use aes::Aes256;
use cbc::cipher::{block_padding::NoPadding, BlockDecryptMut, KeyIvInit};
use thiserror::Error;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use super::padding::{unpad, PaddingError};
use super::{BLOCK_SIZE, IV_LEN, KEY_LEN};
use crate::blob::EncryptedBlob;
use crate::key::{Key, Plaintext};

type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Errors produced by the decryption core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecryptError {
    /// The key is the wrong length (must be [`KEY_LEN`] bytes).
    #[error("invalid key length: expected {KEY_LEN} bytes, got {0}")]
    InvalidKeyLength(usize),

    /// The ciphertext is empty or not a multiple of [`BLOCK_SIZE`].
    #[error("invalid ciphertext length: {0} bytes is not a non-zero multiple of {BLOCK_SIZE}")]
    InvalidCiphertextLength(usize),

    /// The decrypted data did not end in valid PKCS7 padding. Almost always a
    /// wrong key, occasionally corrupted ciphertext.
    ///
    /// The inner reason is available for matching but is deliberately not
    /// part of the message or the error source chain.
    #[error("wrong key or corrupted ciphertext")]
    Padding(PaddingError),
}

impl From<PaddingError> for DecryptError {
    fn from(e: PaddingError) -> Self {
        DecryptError::Padding(e)
    }
}

/// AES-256-CBC decryptor bound to a single key.
///
/// Holds only immutable key material, so one instance can serve concurrent
/// callers on different threads.
#[derive(Debug, Clone)]
pub struct CbcDecryptor {
    key: Key,
}

impl CbcDecryptor {
    /// Build a decryptor from raw key bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DecryptError::InvalidKeyLength`] if `key` is not [`KEY_LEN`] bytes.
    pub fn new(key: &[u8]) -> Result<Self, DecryptError> {
        Ok(Self::with_key(Key::from_slice(key)?))
    }

    /// Build a decryptor from an already-validated [`Key`].
    pub fn with_key(key: Key) -> Self {
        Self { key }
    }

    /// Decrypt `ciphertext` under `iv` and strip its padding.
    ///
    /// Either the fully validated plaintext comes back or an error does;
    /// the intermediate padded buffer is zeroized in both cases.
    ///
    /// # Errors
    ///
    /// Returns [`DecryptError::InvalidCiphertextLength`] if `ciphertext` is
    /// empty or not block-aligned, and [`DecryptError::Padding`] if the
    /// decrypted data carries malformed padding.
    pub fn decrypt(&self, iv: &[u8; IV_LEN], ciphertext: &[u8]) -> Result<Plaintext, DecryptError> {
        let padded = self.decrypt_padded(iv, ciphertext)?;
        match unpad(&padded) {
            Ok(plaintext) => {
                debug!(
                    ciphertext_len = ciphertext.len(),
                    plaintext_len = plaintext.len(),
                    "decrypted"
                );
                Ok(Plaintext::new(plaintext.to_vec()))
            }
            Err(e) => {
                warn!(ciphertext_len = ciphertext.len(), "padding check failed");
                Err(e.into())
            }
        }
    }

    /// Decrypt the ciphertext stored in `blob` using its embedded IV.
    ///
    /// # Errors
    ///
    /// See [`CbcDecryptor::decrypt`].
    pub fn decrypt_blob(&self, blob: &EncryptedBlob) -> Result<Plaintext, DecryptError> {
        self.decrypt(blob.iv(), blob.ciphertext())
    }

    /// Block-decrypt and dechain without touching the padding.
    fn decrypt_padded(
        &self,
        iv: &[u8; IV_LEN],
        ciphertext: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>, DecryptError> {
        if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(DecryptError::InvalidCiphertextLength(ciphertext.len()));
        }

        let mut buf = Zeroizing::new(ciphertext.to_vec());
        Aes256CbcDec::new(self.key.as_bytes().into(), iv.into())
            .decrypt_padded_mut::<NoPadding>(&mut buf[..])
            .map_err(|_| DecryptError::InvalidCiphertextLength(ciphertext.len()))?;
        Ok(buf)
    }
}

/// One-shot form of [`CbcDecryptor::decrypt`] taking raw key bytes.
///
/// # Errors
///
/// Returns [`DecryptError::InvalidKeyLength`] if `key` is not [`KEY_LEN`]
/// bytes, otherwise any error from [`CbcDecryptor::decrypt`].
pub fn decrypt(key: &[u8], iv: &[u8; IV_LEN], ciphertext: &[u8]) -> Result<Plaintext, DecryptError> {
    CbcDecryptor::new(key)?.decrypt(iv, ciphertext)
}
