//! Error types for the akvault library.
//!
//! This module defines all error types used throughout the library.
//! All errors implement `std::error::Error` and are designed to let a
//! caller tell "wrong password" apart from "wrong or corrupted file".

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for akvault operations.
///
/// This enum covers all possible errors that can occur during key
/// generation, password-based encryption, address encoding, and storage.
#[derive(Error, Debug)]
pub enum AkVaultError {
    /// The OS entropy source could not be read
    #[error("random source unavailable: {0}")]
    RandomSourceUnavailable(String),

    /// An empty password was supplied
    #[error("password must not be empty")]
    WeakPassword,

    /// Key material has an unsupported length
    #[error("invalid key length: expected 32 or 64 bytes, got {0}")]
    InvalidKeyLength(usize),

    /// Key derivation failed
    #[error("key derivation error: {0}")]
    KeyDerivationError(String),

    /// Encryption failed, or an encrypted blob is structurally invalid
    #[error("encryption error: {0}")]
    EncryptionError(String),

    /// The ciphertext did not authenticate under the supplied password
    #[error("decryption failed, check your password")]
    AuthenticationFailed,

    /// Invalid key content (e.g. mismatched public half)
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// An address string is structurally invalid
    #[error("malformed address: {0}")]
    MalformedAddress(String),

    /// An address decoded cleanly but its checksum tail disagrees
    #[error("address checksum mismatch")]
    ChecksumMismatch,

    /// An identity's key files already exist on disk
    #[error("identity '{0}' already exists")]
    IdentityAlreadyExists(String),

    /// An identity's key files are missing from disk
    #[error("identity '{0}' not found")]
    IdentityNotFound(String),

    /// Storage I/O error, with the path it occurred on
    #[error("storage I/O error at {path}: {source}")]
    StorageError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the interactive password prompt failed
    #[error("password prompt failed: {0}")]
    PasswordPrompt(String),
}

impl AkVaultError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StorageError {
            path: path.into(),
            source,
        }
    }
}

/// A specialized Result type for akvault operations.
pub type Result<T> = std::result::Result<T, AkVaultError>;
