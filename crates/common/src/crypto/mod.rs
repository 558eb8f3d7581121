//! AES-256-CBC with PKCS7 padding.
//!
//! The block cipher and the CBC chaining come from the RustCrypto `aes` and
//! `cbc` crates. This module owns what sits around them: key and ciphertext
//! length checks, PKCS7 padding, and error reporting that does not leak
//! *why* a padding check failed.
//!
//! # Pipeline
//!
//! ```text
//! ciphertext ──► AES-256 block decrypt ──► XOR previous block (C_0 = IV) ──► unpad ──► plaintext
//! ```
//!
//! **There is no integrity tag.** A flipped ciphertext bit garbles one
//! plaintext block and flips the same bit in the next; unless the damage
//! reaches the final padding bytes, decryption still succeeds.

pub mod decryptor;
pub mod encryptor;
pub mod padding;

pub use decryptor::{decrypt, CbcDecryptor, DecryptError};
pub use encryptor::CbcEncryptor;
pub use padding::{pad, unpad, PaddingError};

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Byte length of an AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// Byte length of a CBC initialisation vector (one block).
pub const IV_LEN: usize = BLOCK_SIZE;
