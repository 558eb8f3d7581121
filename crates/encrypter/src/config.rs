//! Configuration loading and validation for the encrypter.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Validated encrypter configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Where to write the `IV || ciphertext` blob.
    #[serde(default = "default_blob_path")]
    pub blob_path: String,

    /// Text to encrypt.
    #[serde(default = "default_message")]
    pub message: String,

    /// 64-character hex key. A fresh random key is generated (and printed)
    /// when unset.
    #[serde(default)]
    pub key_hex: Option<String>,

    /// Tracing log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_blob_path() -> String {
    "encrypted.bin".into()
}
fn default_message() -> String {
    "Hello from the AES-256-CBC demo!".into()
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build encrypter configuration")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise encrypter configuration")?;

        c.validate()?;
        Ok(c)
    }

    fn validate(&self) -> Result<()> {
        if self.blob_path.trim().is_empty() {
            anyhow::bail!("BLOB_PATH must not be empty");
        }
        if let Some(key_hex) = &self.key_hex {
            if key_hex.trim().len() != 64 {
                anyhow::bail!("KEY_HEX must be exactly 64 hex characters");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Config {
        Config {
            blob_path: default_blob_path(),
            message: default_message(),
            key_hex: None,
            log_level: default_log_level(),
        }
    }

    #[test]
    fn defaults() {
        assert_eq!(default_blob_path(), "encrypted.bin");
        assert_eq!(default_log_level(), "info");
        assert!(!default_message().is_empty());
    }

    #[test]
    fn validate_accepts_missing_key() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn validate_rejects_short_key() {
        let cfg = Config {
            key_hex: Some("abcd".into()),
            ..base()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_blob_path() {
        let cfg = Config {
            blob_path: "".into(),
            ..base()
        };
        assert!(cfg.validate().is_err());
    }
}
