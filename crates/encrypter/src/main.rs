//! `encrypter` — companion binary that writes an AES-256-CBC blob for the
//! decrypter to read.
//!
//! Startup sequence:
//! 1. Load and validate [`config::Config`] from environment variables.
//! 2. Initialise structured JSON logging on stderr.
//! 3. Encrypt `MESSAGE` under a fresh IV from the OS CSPRNG and write
//!    `IV || ciphertext` to `BLOB_PATH`.

mod config;
mod seal;
mod telemetry;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use rand::rngs::OsRng;
use tracing::{info, warn};

fn main() -> Result<ExitCode> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = config::Config::from_env().map_err(|e| {
        eprintln!("ERROR: encrypter configuration invalid: {e}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init(&cfg.log_level)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        blob_path = %cfg.blob_path,
        "encrypter starting"
    );

    // -----------------------------------------------------------------------
    // 3. Encrypt and write
    // -----------------------------------------------------------------------
    let mut stdout = io::stdout();
    match seal::run(&cfg, &mut OsRng, &mut stdout) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            warn!(exit_code = e.exit_code(), error = %e, "encrypter run failed");
            writeln!(stdout, "{e}")?;
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}
