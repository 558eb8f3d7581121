//! User-facing errors for the demo binaries.

use std::io;

use thiserror::Error;

use crate::blob::BlobError;
use crate::crypto::DecryptError;

/// Everything that can end a decrypter or encrypter run.
///
/// The `Display` text is the message printed to the user. Each variant maps
/// to a process exit status:
/// - [`CliError::Decryption`] → 1
/// - [`CliError::BlobTooShort`], [`CliError::InvalidKey`], [`CliError::InvalidUtf8`] → 65 (data error)
/// - [`CliError::MissingInput`] → 66 (no input)
/// - [`CliError::Io`], [`CliError::Terminal`] → 74 (I/O error)
#[derive(Debug, Error)]
pub enum CliError {
    /// The blob file does not exist.
    #[error("Error: {0} not found. Run the encrypter first.")]
    MissingInput(String),

    /// The blob file exists but could not be read or written.
    #[error("Error: {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Reading the key from, or writing to, the terminal failed.
    #[error("Error: terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),

    /// The blob cannot even hold an IV.
    #[error("Error: Encrypted data is too short.")]
    BlobTooShort(#[from] BlobError),

    /// The entered key is not 64 hex characters.
    #[error("Invalid key. Must be 64 hex characters (32 bytes).")]
    InvalidKey,

    /// The core rejected the ciphertext or the key.
    #[error("Decryption failed: {0}")]
    Decryption(#[from] DecryptError),

    /// Decryption succeeded but the plaintext is not UTF-8 text.
    #[error("Decryption failed: message is not valid UTF-8 text")]
    InvalidUtf8,
}

impl CliError {
    /// Returns the process exit status that should be used for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Decryption(_) => 1,
            CliError::BlobTooShort(_) | CliError::InvalidKey | CliError::InvalidUtf8 => 65,
            CliError::MissingInput(_) => 66,
            CliError::Io { .. } | CliError::Terminal(_) => 74,
        }
    }
}
