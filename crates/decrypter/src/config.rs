//! Configuration loading and validation for the decrypter.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Validated decrypter configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path of the `IV || ciphertext` blob written by the encrypter.
    #[serde(default = "default_blob_path")]
    pub blob_path: String,

    /// Tracing log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_blob_path() -> String {
    "encrypted.bin".into()
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or fails validation.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build decrypter configuration")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise decrypter configuration")?;

        c.validate()?;
        Ok(c)
    }

    fn validate(&self) -> Result<()> {
        if self.blob_path.trim().is_empty() {
            anyhow::bail!("BLOB_PATH must not be empty");
        }
        Ok(())
    }
}
