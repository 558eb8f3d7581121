//! `decrypter` — interactive AES-256-CBC decrypter entry point.
//!
//! Startup sequence:
//! 1. Load and validate [`config::Config`] from environment variables.
//! 2. Initialise structured JSON logging on stderr.
//! 3. Run one decryption session on stdin/stdout and map any failure to an
//!    exit status.

mod config;
mod prompt;
mod session;
mod telemetry;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use tracing::{info, warn};

fn main() -> Result<ExitCode> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = config::Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: decrypter configuration invalid: {e}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init(&cfg.log_level)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        blob_path = %cfg.blob_path,
        "decrypter starting"
    );

    // -----------------------------------------------------------------------
    // 3. Session
    // -----------------------------------------------------------------------
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match session::run(&cfg, stdin.lock(), &mut stdout) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            warn!(exit_code = e.exit_code(), error = %e, "decrypter run failed");
            writeln!(stdout, "{e}")?;
            Ok(ExitCode::from(e.exit_code()))
        }
    }
}
