//! Password-based encryption of key material.
//!
//! Both halves of a keypair are stored encrypted with the same scheme:
//! Argon2id stretches the password into an AES key, AES-256-GCM
//! encrypts. The GCM tag makes decryption authenticated, so a wrong
//! password fails with [`AkVaultError::AuthenticationFailed`] instead of
//! yielding garbage.
//!
//! Blob layout:
//!
//! ```text
//! [salt (32 bytes)][nonce (12 bytes)][ciphertext + tag (variable)]
//! ```
//!
//! Salt and nonce are drawn fresh from the OS entropy source per
//! encryption, so equal passwords and equal plaintexts never produce
//! related ciphertexts.

use crate::error::{AkVaultError, Result};
use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm,
};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

/// Length of the per-encryption salt prepended to each blob.
pub const SALT_LENGTH: usize = 32;

/// Length of the AES-GCM nonce following the salt.
pub const NONCE_LENGTH: usize = 12;

/// Length of the derived AES-256 key.
const KEY_LENGTH: usize = 32;

// Argon2id cost parameters: 64 MiB, 3 passes, one lane. These are part
// of the on-disk format; blobs do not record them.
const KDF_MEMORY_KIB: u32 = 64 * 1024;
const KDF_PASSES: u32 = 3;
const KDF_LANES: u32 = 1;

/// Fill `buf` from the OS entropy source.
fn fill_random(buf: &mut [u8]) -> Result<()> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| AkVaultError::RandomSourceUnavailable(e.to_string()))
}

/// Stretch a password into an AES-256 key with Argon2id.
fn derive_cipher_key(
    password: &str,
    salt: &[u8; SALT_LENGTH],
) -> Result<Zeroizing<[u8; KEY_LENGTH]>> {
    let params = Params::new(KDF_MEMORY_KIB, KDF_PASSES, KDF_LANES, Some(KEY_LENGTH))
        .map_err(|e| AkVaultError::KeyDerivationError(format!("argon2 params: {}", e)))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut key = Zeroizing::new([0u8; KEY_LENGTH]);
    argon2
        .hash_password_into(password.as_bytes(), salt, &mut key[..])
        .map_err(|e| AkVaultError::KeyDerivationError(format!("argon2 error: {}", e)))?;

    Ok(key)
}

/// Check that `len` is a supported width for key material: a 32-byte
/// public key or seed, or a 64-byte seed-then-public concatenation.
fn check_key_length(len: usize) -> Result<()> {
    if len == 32 || len == 64 {
        Ok(())
    } else {
        Err(AkVaultError::InvalidKeyLength(len))
    }
}

/// Encrypt key material using a password.
///
/// # Arguments
///
/// * `key` - The key bytes to encrypt (32 or 64 bytes)
/// * `password` - The password to encrypt under (must be non-empty)
///
/// # Example
///
/// ```
/// use akvault::crypto::encryption::{encrypt_key_material, decrypt_key_material};
///
/// let key = [7u8; 32];
/// let password = "correct horse battery staple";
///
/// let encrypted = encrypt_key_material(&key, password).unwrap();
/// let decrypted = decrypt_key_material(&encrypted, password).unwrap();
///
/// assert_eq!(&key[..], &decrypted[..]);
/// ```
pub fn encrypt_key_material(key: &[u8], password: &str) -> Result<Vec<u8>> {
    if password.is_empty() {
        return Err(AkVaultError::WeakPassword);
    }
    check_key_length(key.len())?;

    let mut salt = [0u8; SALT_LENGTH];
    fill_random(&mut salt)?;
    let derived_key = derive_cipher_key(password, &salt)?;

    let mut nonce_bytes = [0u8; NONCE_LENGTH];
    fill_random(&mut nonce_bytes)?;

    let cipher = Aes256Gcm::new_from_slice(&derived_key[..])
        .map_err(|e| AkVaultError::EncryptionError(format!("invalid key length: {}", e)))?;
    let ciphertext = cipher
        .encrypt(&nonce_bytes.into(), key)
        .map_err(|e| AkVaultError::EncryptionError(format!("encryption failed: {}", e)))?;

    // Combine salt + nonce + ciphertext
    let mut output = Vec::with_capacity(SALT_LENGTH + NONCE_LENGTH + ciphertext.len());
    output.extend_from_slice(&salt);
    output.extend_from_slice(&nonce_bytes);
    output.extend_from_slice(&ciphertext);

    Ok(output)
}

/// Decrypt key material using a password.
///
/// The returned buffer is zeroized when dropped.
///
/// # Arguments
///
/// * `encrypted` - The encrypted blob (format: \[salt\]\[nonce\]\[ciphertext\])
/// * `password` - The password used for encryption
///
/// # Errors
///
/// Fails with [`AkVaultError::AuthenticationFailed`] when the password is
/// wrong or the blob has been tampered with, and with
/// [`AkVaultError::InvalidKeyLength`] when the authenticated plaintext is
/// not 32 or 64 bytes.
pub fn decrypt_key_material(encrypted: &[u8], password: &str) -> Result<Zeroizing<Vec<u8>>> {
    if password.is_empty() {
        return Err(AkVaultError::WeakPassword);
    }

    let min_length = SALT_LENGTH + NONCE_LENGTH;
    if encrypted.len() < min_length {
        return Err(AkVaultError::EncryptionError(format!(
            "encrypted data too short: expected at least {} bytes, got {}",
            min_length,
            encrypted.len()
        )));
    }

    let mut salt = [0u8; SALT_LENGTH];
    salt.copy_from_slice(&encrypted[..SALT_LENGTH]);
    let nonce_bytes = &encrypted[SALT_LENGTH..SALT_LENGTH + NONCE_LENGTH];
    let ciphertext = &encrypted[SALT_LENGTH + NONCE_LENGTH..];

    let derived_key = derive_cipher_key(password, &salt)?;

    let cipher = Aes256Gcm::new_from_slice(&derived_key[..])
        .map_err(|e| AkVaultError::EncryptionError(format!("invalid key length: {}", e)))?;

    let plaintext = Zeroizing::new(
        cipher
            .decrypt(nonce_bytes.into(), ciphertext)
            .map_err(|_| AkVaultError::AuthenticationFailed)?,
    );

    check_key_length(plaintext.len())?;

    Ok(plaintext)
}
