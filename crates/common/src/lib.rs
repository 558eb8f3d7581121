//! Shared types for the AES-256-CBC demo binaries: the decryption core, the
//! on-disk blob format, secret containers, and boundary errors.

pub mod blob;
pub mod crypto;
pub mod error;
pub mod key;

pub use blob::{BlobError, EncryptedBlob};
pub use crypto::{decrypt, CbcDecryptor, CbcEncryptor, DecryptError, PaddingError};
pub use error::CliError;
pub use key::{Key, Plaintext};
