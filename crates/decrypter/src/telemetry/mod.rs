//! Telemetry initialisation for the decrypter.
//!
//! Structured JSON logs go to **stderr**; stdout belongs to the prompt and
//! the recovered message.
//!
//! # Telemetry invariants
//!
//! - **No key material or plaintext** may appear in any log field. Events
//!   carry lengths, paths, and error kinds only.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialise the tracing subscriber.
///
/// `RUST_LOG`, when set, overrides `log_level`.
///
/// # Errors
///
/// Returns an error if the subscriber has already been set.
pub fn init(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise decrypter tracing subscriber: {e}"))
}
