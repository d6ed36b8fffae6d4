//! Ed25519 keypair generation.
//!
//! This module produces the keypairs behind every vault identity. Key
//! generation always seeds from the OS entropy source; there is no
//! caller-supplied seed, so two identities can never accidentally share
//! key material.

use crate::error::{AkVaultError, Result};
use ed25519_dalek::{SigningKey, VerifyingKey, KEYPAIR_LENGTH, SECRET_KEY_LENGTH};
use rand::rngs::OsRng;
use rand::RngCore;
use std::fmt;
use zeroize::Zeroizing;

/// An Ed25519 keypair consisting of a signing key and its public key.
///
/// The signing key is zeroized when the pair is dropped. `Debug` output
/// shows the public key only.
#[derive(Clone)]
pub struct Keypair {
    secret: SigningKey,
    public: VerifyingKey,
}

impl Keypair {
    fn from_signing_key(secret: SigningKey) -> Self {
        let public = secret.verifying_key();
        Self { secret, public }
    }

    /// Rebuild a keypair from raw secret material.
    ///
    /// Accepts either a 32-byte seed or a 64-byte seed-then-public
    /// concatenation (the layout written to disk). For the 64-byte form
    /// the public half must match the seed half.
    ///
    /// # Example
    ///
    /// ```
    /// use akvault::crypto::ed25519::{generate_keypair, Keypair};
    ///
    /// let keypair = generate_keypair().unwrap();
    /// let rebuilt = Keypair::from_secret_bytes(&keypair.secret_bytes()[..]).unwrap();
    /// assert_eq!(keypair.public_bytes(), rebuilt.public_bytes());
    /// ```
    pub fn from_secret_bytes(bytes: &[u8]) -> Result<Self> {
        match bytes.len() {
            SECRET_KEY_LENGTH => {
                let mut seed = [0u8; SECRET_KEY_LENGTH];
                seed.copy_from_slice(bytes);
                let keypair = Self::from_signing_key(SigningKey::from_bytes(&seed));
                seed.fill(0);
                Ok(keypair)
            }
            KEYPAIR_LENGTH => {
                let mut raw = [0u8; KEYPAIR_LENGTH];
                raw.copy_from_slice(bytes);
                let secret = SigningKey::from_keypair_bytes(&raw).map_err(|_| {
                    AkVaultError::InvalidKey(
                        "public half does not match the signing key".to_string(),
                    )
                });
                raw.fill(0);
                Ok(Self::from_signing_key(secret?))
            }
            other => Err(AkVaultError::InvalidKeyLength(other)),
        }
    }

    /// Get the public key as bytes.
    pub fn public_bytes(&self) -> [u8; 32] {
        self.public.to_bytes()
    }

    /// Get the full secret material as the 64-byte seed-then-public
    /// concatenation. Handle with care and wipe when done.
    pub fn secret_bytes(&self) -> Zeroizing<[u8; KEYPAIR_LENGTH]> {
        Zeroizing::new(self.secret.to_keypair_bytes())
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Secret material stays out of debug output.
        write!(f, "Keypair(pub={})", hex::encode(self.public_bytes()))
    }
}

/// Generate a new Ed25519 keypair from the OS entropy source.
///
/// # Example
///
/// ```
/// use akvault::crypto::ed25519::generate_keypair;
///
/// let keypair = generate_keypair().unwrap();
/// assert_eq!(keypair.public_bytes().len(), 32);
/// ```
pub fn generate_keypair() -> Result<Keypair> {
    let mut seed = Zeroizing::new([0u8; SECRET_KEY_LENGTH]);
    OsRng
        .try_fill_bytes(&mut seed[..])
        .map_err(|e| AkVaultError::RandomSourceUnavailable(e.to_string()))?;

    Ok(Keypair::from_signing_key(SigningKey::from_bytes(&seed)))
}
