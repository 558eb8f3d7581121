//! Interactive key entry.
//!
//! The core only accepts raw key bytes; turning the typed hex string into a
//! [`Key`] happens here, before the core is ever called.

use std::io::{BufRead, Write};

use common::{CliError, Key};
use zeroize::Zeroizing;

const EXAMPLE_KEY: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

/// Prompt on `output` and read one line of hex from `input`.
///
/// # Errors
///
/// Returns [`CliError::Terminal`] if the terminal cannot be read or written,
/// and [`CliError::InvalidKey`] if the line is not 64 hex characters.
pub fn read_key<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<Key, CliError> {
    writeln!(output, "Enter the 64-character hex key used for encryption:")?;
    writeln!(output, "Example: {EXAMPLE_KEY}")?;
    output.flush()?;

    let mut line = Zeroizing::new(String::new());
    input.read_line(&mut *line)?;
    parse_key_hex(&line)
}

/// Decode a hex key, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns [`CliError::InvalidKey`] for malformed hex or a decoded length
/// other than 32 bytes.
pub fn parse_key_hex(text: &str) -> Result<Key, CliError> {
    let bytes = Zeroizing::new(hex::decode(text.trim()).map_err(|_| CliError::InvalidKey)?);
    Key::from_slice(&bytes).map_err(|_| CliError::InvalidKey)
}
