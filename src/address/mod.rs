//! Textual account addresses.
//!
//! A public key is rendered as `<prefix>$<base58check(bytes)>`, e.g.
//! `ak$2Xh8o…` for an account key. The checksum makes single-character
//! typos detectable; decoding distinguishes a structurally broken string
//! ([`AkVaultError::MalformedAddress`]) from a well-formed one whose
//! checksum fails ([`AkVaultError::ChecksumMismatch`]).

pub mod base58check;

use crate::error::{AkVaultError, Result};

pub use base58check::CHECKSUM_LENGTH;

/// The prefix used for account public keys.
pub const ACCOUNT_PREFIX: &str = "ak";

/// Encode raw public key bytes as a prefixed, checksummed address.
///
/// # Example
///
/// ```
/// use akvault::address::{encode, decode, ACCOUNT_PREFIX};
///
/// let address = encode(&[1u8; 32], ACCOUNT_PREFIX);
/// assert!(address.starts_with("ak$"));
///
/// let (bytes, prefix) = decode(&address).unwrap();
/// assert_eq!(bytes, vec![1u8; 32]);
/// assert_eq!(prefix, ACCOUNT_PREFIX);
/// ```
pub fn encode(public_key: &[u8], prefix: &str) -> String {
    format!("{}${}", prefix, base58check::encode_check(public_key))
}

/// Decode a prefixed address back into raw bytes and its prefix.
///
/// Round-trip law: `decode(encode(bytes, prefix))` returns the identical
/// bytes and prefix, and re-encoding them reproduces the same string.
pub fn decode(address: &str) -> Result<(Vec<u8>, String)> {
    let (prefix, payload) = address
        .split_once('$')
        .ok_or_else(|| AkVaultError::MalformedAddress("missing '$' separator".to_string()))?;

    if prefix.is_empty() {
        return Err(AkVaultError::MalformedAddress("empty prefix".to_string()));
    }
    if payload.is_empty() {
        return Err(AkVaultError::MalformedAddress("empty payload".to_string()));
    }

    let bytes = base58check::decode_check(payload)?;
    Ok((bytes, prefix.to_string()))
}
