//! One decrypter run: load the blob, ask for the key, decrypt, print.
//!
//! Nothing from the recovered message reaches `output` until it has passed
//! both the padding check and UTF-8 decoding.

use std::fs;
use std::io::{self, BufRead, Write};

use common::{CbcDecryptor, CliError, EncryptedBlob};
use tracing::{debug, info};

use crate::config::Config;
use crate::prompt;

/// Run the interactive decryption flow against `input` / `output`.
///
/// # Errors
///
/// Returns the first [`CliError`] hit; the caller prints it and chooses the
/// exit status.
pub fn run<R: BufRead, W: Write>(cfg: &Config, mut input: R, mut output: W) -> Result<(), CliError> {
    writeln!(output, "Reading encrypted data from {}...", cfg.blob_path)?;
    let data = read_blob(&cfg.blob_path)?;
    let blob = EncryptedBlob::from_bytes(&data)?;
    debug!(
        blob_len = data.len(),
        ciphertext_len = blob.ciphertext().len(),
        "blob loaded"
    );

    let key = prompt::read_key(&mut input, &mut output)?;

    writeln!(output, "Decrypting the message...")?;
    let plaintext = CbcDecryptor::with_key(key).decrypt_blob(&blob)?;
    let message = plaintext.to_utf8().map_err(|_| CliError::InvalidUtf8)?;
    writeln!(output, "Decrypted message: {message}")?;

    info!(plaintext_len = plaintext.len(), "message decrypted");
    Ok(())
}

fn read_blob(path: &str) -> Result<Vec<u8>, CliError> {
    fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CliError::MissingInput(path.to_owned()),
        _ => CliError::Io {
            path: path.to_owned(),
            source: e,
        },
    })
}
