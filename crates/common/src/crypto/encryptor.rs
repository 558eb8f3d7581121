//! The encrypting half: PKCS7 pad, then AES-256-CBC.

use aes::Aes256;
use cbc::cipher::{block_padding::NoPadding, BlockEncryptMut, KeyIvInit};
use zeroize::Zeroizing;

use super::padding::pad;
use super::IV_LEN;
use crate::blob::EncryptedBlob;
use crate::key::Key;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;

/// AES-256-CBC encryptor bound to a single key.
///
/// The caller supplies the IV and must never reuse one under the same key.
#[derive(Debug, Clone)]
pub struct CbcEncryptor {
    key: Key,
}

impl CbcEncryptor {
    pub fn new(key: Key) -> Self {
        Self { key }
    }

    /// Pad and encrypt `plaintext`. The output does **not** include the IV.
    pub fn encrypt(&self, iv: &[u8; IV_LEN], plaintext: &[u8]) -> Vec<u8> {
        let padded = Zeroizing::new(pad(plaintext));
        Aes256CbcEnc::new(self.key.as_bytes().into(), iv.into())
            .encrypt_padded_vec_mut::<NoPadding>(padded.as_slice())
    }

    /// Encrypt `plaintext` and package it with `iv` as an [`EncryptedBlob`].
    pub fn seal(&self, iv: [u8; IV_LEN], plaintext: &[u8]) -> EncryptedBlob {
        let ciphertext = self.encrypt(&iv, plaintext);
        EncryptedBlob::new(iv, ciphertext)
    }
}
