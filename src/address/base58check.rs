//! Base58 encoding with a double-SHA-256 checksum tail.
//!
//! Payloads are encoded as `base58(payload || sha256(sha256(payload))[..4])`
//! over the Bitcoin alphabet, which has no ambiguous characters (0/O/I/l).

use crate::error::{AkVaultError, Result};
use sha2::{Digest, Sha256};

/// Number of checksum bytes appended to the payload before encoding.
pub const CHECKSUM_LENGTH: usize = 4;

fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let digest = Sha256::digest(Sha256::digest(payload));
    let mut tail = [0u8; CHECKSUM_LENGTH];
    tail.copy_from_slice(&digest[..CHECKSUM_LENGTH]);
    tail
}

/// Encode a payload with an appended 4-byte double-SHA-256 checksum.
pub fn encode_check(payload: &[u8]) -> String {
    let mut raw = Vec::with_capacity(payload.len() + CHECKSUM_LENGTH);
    raw.extend_from_slice(payload);
    raw.extend_from_slice(&checksum(payload));
    bs58::encode(raw).into_string()
}

/// Decode a base58check string, verifying its checksum tail.
///
/// # Errors
///
/// Fails with [`AkVaultError::MalformedAddress`] on non-base58 characters
/// or a payload too short to carry a checksum, and with
/// [`AkVaultError::ChecksumMismatch`] when the recomputed checksum
/// disagrees with the tail.
pub fn decode_check(encoded: &str) -> Result<Vec<u8>> {
    let raw = bs58::decode(encoded)
        .into_vec()
        .map_err(|e| AkVaultError::MalformedAddress(format!("invalid base58: {}", e)))?;

    if raw.len() <= CHECKSUM_LENGTH {
        return Err(AkVaultError::MalformedAddress(format!(
            "payload too short: {} bytes",
            raw.len()
        )));
    }

    let (payload, tail) = raw.split_at(raw.len() - CHECKSUM_LENGTH);
    if checksum(payload)[..] != tail[..] {
        return Err(AkVaultError::ChecksumMismatch);
    }

    Ok(payload.to_vec())
}
