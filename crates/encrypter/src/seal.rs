//! Encrypt the configured message under a fresh IV and write the blob.

use std::fs;
use std::io::Write;

use common::crypto::{IV_LEN, KEY_LEN};
use common::{CbcEncryptor, CliError, Key};
use rand::{CryptoRng, RngCore};
use tracing::info;
use zeroize::{Zeroize, Zeroizing};

/// Run one encryption, drawing the IV (and the key, if none is configured)
/// from `rng`.
///
/// # Errors
///
/// Returns [`CliError::InvalidKey`] for a malformed `KEY_HEX`, and
/// [`CliError::Io`] if the blob cannot be written.
pub fn run<G, W>(cfg: &crate::config::Config, rng: &mut G, mut output: W) -> Result<(), CliError>
where
    G: RngCore + CryptoRng,
    W: Write,
{
    let (key, generated) = match cfg.key_hex.as_deref() {
        Some(text) => (parse_key_hex(text)?, false),
        None => (generate_key(rng), true),
    };

    let mut iv = [0u8; IV_LEN];
    rng.fill_bytes(&mut iv);

    let blob = CbcEncryptor::new(key.clone()).seal(iv, cfg.message.as_bytes());
    let bytes = blob.to_bytes();
    fs::write(&cfg.blob_path, &bytes).map_err(|e| CliError::Io {
        path: cfg.blob_path.clone(),
        source: e,
    })?;
    info!(blob_len = bytes.len(), key_generated = generated, "blob written");

    writeln!(output, "Encrypted message written to {}", cfg.blob_path)?;
    if generated {
        let key_hex = Zeroizing::new(hex::encode(key.as_bytes()));
        writeln!(output, "Key (keep it secret): {}", key_hex.as_str())?;
    }
    Ok(())
}

fn parse_key_hex(text: &str) -> Result<Key, CliError> {
    let bytes = Zeroizing::new(hex::decode(text.trim()).map_err(|_| CliError::InvalidKey)?);
    Key::from_slice(&bytes).map_err(|_| CliError::InvalidKey)
}

fn generate_key<G: RngCore + CryptoRng>(rng: &mut G) -> Key {
    let mut bytes = [0u8; KEY_LEN];
    rng.fill_bytes(&mut bytes);
    let key = Key::from_bytes(bytes);
    bytes.zeroize();
    key
}

#[cfg(test)]
mod tests {
    use common::{CbcDecryptor, EncryptedBlob};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    use super::*;
    use crate::config::Config;

    const KEY_HEX: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

    fn config(dir: &TempDir, key_hex: Option<&str>) -> Config {
        Config {
            blob_path: dir.path().join("encrypted.bin").to_string_lossy().into_owned(),
            message: "HELLO".into(),
            key_hex: key_hex.map(str::to_owned),
            log_level: "info".into(),
        }
    }

    fn read_blob(cfg: &Config) -> EncryptedBlob {
        EncryptedBlob::from_bytes(&fs::read(&cfg.blob_path).unwrap()).unwrap()
    }

    #[test]
    fn configured_key_round_trips_and_is_not_printed() {
        let dir = TempDir::new().unwrap();
        let cfg = config(&dir, Some(KEY_HEX));
        let mut output = Vec::new();
        run(&cfg, &mut StdRng::seed_from_u64(1), &mut output).unwrap();

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.starts_with("Encrypted message written to"));
        assert!(!shown.contains(KEY_HEX));

        let blob = read_blob(&cfg);
        let plaintext = CbcDecryptor::new(&hex::decode(KEY_HEX).unwrap())
            .unwrap()
            .decrypt_blob(&blob)
            .unwrap();
        assert_eq!(plaintext.to_utf8().unwrap(), "HELLO");
    }

    #[test]
    fn generated_key_is_printed_and_decrypts() {
        let dir = TempDir::new().unwrap();
        let cfg = config(&dir, None);
        let mut output = Vec::new();
        run(&cfg, &mut StdRng::seed_from_u64(2), &mut output).unwrap();

        let shown = String::from_utf8(output).unwrap();
        let printed = shown
            .lines()
            .find_map(|l| l.strip_prefix("Key (keep it secret): "))
            .unwrap();
        assert_eq!(printed.len(), 2 * KEY_LEN);

        let plaintext = CbcDecryptor::new(&hex::decode(printed).unwrap())
            .unwrap()
            .decrypt_blob(&read_blob(&cfg))
            .unwrap();
        assert_eq!(plaintext.as_bytes(), b"HELLO");
    }

    #[test]
    fn each_run_uses_a_fresh_iv() {
        let dir = TempDir::new().unwrap();
        let cfg = config(&dir, Some(KEY_HEX));
        let mut rng = StdRng::seed_from_u64(3);

        run(&cfg, &mut rng, Vec::new()).unwrap();
        let first = read_blob(&cfg);
        run(&cfg, &mut rng, Vec::new()).unwrap();
        let second = read_blob(&cfg);

        assert_ne!(first.iv(), second.iv());
        assert_ne!(first.ciphertext(), second.ciphertext());
    }

    #[test]
    fn malformed_key_hex_rejected() {
        let dir = TempDir::new().unwrap();
        let cfg = config(&dir, Some(&"zz".repeat(KEY_LEN)));
        let result = run(&cfg, &mut StdRng::seed_from_u64(4), Vec::new());
        assert!(matches!(result, Err(CliError::InvalidKey)));
        assert!(!dir.path().join("encrypted.bin").exists());
    }

    #[test]
    fn unwritable_path_is_io_error() {
        let dir = TempDir::new().unwrap();
        let mut cfg = config(&dir, Some(KEY_HEX));
        cfg.blob_path = dir
            .path()
            .join("missing-dir")
            .join("encrypted.bin")
            .to_string_lossy()
            .into_owned();

        let err = run(&cfg, &mut StdRng::seed_from_u64(5), Vec::new()).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
        assert_eq!(err.exit_code(), 74);
    }
}
