//! Creating and revealing stored identities.
//!
//! `create_identity` generates a fresh keypair and persists both halves
//! password-encrypted; `reveal_identity` recovers them for a single-shot
//! display. Creation writes through temp files and renames, and cleans up
//! every partial artifact on failure, so an interrupted run never leaves
//! one key file without its pair.

use crate::address::{self, ACCOUNT_PREFIX};
use crate::crypto::ed25519::{generate_keypair, Keypair};
use crate::crypto::encryption::{decrypt_key_material, encrypt_key_material};
use crate::error::{AkVaultError, Result};
use crate::storage::identity::Identity;
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The plaintext representations of an identity's keys, produced by
/// [`reveal_identity`] for display. Zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct RevealedKeys {
    /// The 64-byte private key material, hex encoded (128 characters).
    pub private_key_hex: String,

    /// The 32-byte public key, hex encoded (64 characters).
    pub public_key_hex: String,

    /// The public key as a checksummed `ak$…` address.
    pub public_address: String,
}

/// Generate a keypair for `identity` and persist both halves encrypted
/// under `password`.
///
/// Writes exactly two files, `sign_key` and `sign_key.pub`, inside the
/// identity's directory. Refuses to touch an identity for which either
/// file already exists.
///
/// # Example
///
/// ```rust,no_run
/// use akvault::storage::identity::Identity;
/// use akvault::storage::keystore::create_identity;
///
/// # fn example() -> akvault::error::Result<()> {
/// let identity = Identity::new("alice", "/keys");
/// create_identity(&identity, "correct horse battery staple")?;
/// # Ok(())
/// # }
/// ```
pub fn create_identity(identity: &Identity, password: &str) -> Result<()> {
    if identity.has_any_key_file() {
        return Err(AkVaultError::IdentityAlreadyExists(
            identity.name().to_string(),
        ));
    }

    // All fallible crypto happens before anything touches the filesystem.
    let keypair = generate_keypair()?;
    let secret = keypair.secret_bytes();
    let encrypted_secret = encrypt_key_material(&secret[..], password)?;
    let encrypted_public = encrypt_key_material(&keypair.public_bytes(), password)?;

    let dir = identity.dir();
    let created_dir = !dir.exists();
    fs::create_dir_all(&dir).map_err(|e| AkVaultError::storage(&dir, e))?;

    let written = write_blob(&identity.sign_key_path(), &encrypted_secret)
        .and_then(|_| write_blob(&identity.sign_key_pub_path(), &encrypted_public));

    if written.is_err() {
        remove_artifacts(identity, created_dir);
        return written;
    }

    info!(
        identity = identity.name(),
        dir = %dir.display(),
        "created identity key files"
    );
    Ok(())
}

/// Load and decrypt an identity's key files for display.
///
/// Both blobs are decrypted with the supplied password, the public key is
/// re-derived from the private material and checked against the stored
/// public blob, and the public key is rendered as an `ak$…` address.
pub fn reveal_identity(identity: &Identity, password: &str) -> Result<RevealedKeys> {
    if !identity.exists() {
        return Err(AkVaultError::IdentityNotFound(identity.name().to_string()));
    }

    let sign_key_path = identity.sign_key_path();
    let sign_key_pub_path = identity.sign_key_pub_path();

    let encrypted_secret =
        fs::read(&sign_key_path).map_err(|e| AkVaultError::storage(&sign_key_path, e))?;
    let encrypted_public =
        fs::read(&sign_key_pub_path).map_err(|e| AkVaultError::storage(&sign_key_pub_path, e))?;

    let secret = decrypt_key_material(&encrypted_secret, password)?;
    let public = decrypt_key_material(&encrypted_public, password)?;

    // A mixed-up pair of files would decrypt fine under the right
    // password; reject it before showing an address that does not belong
    // to the private key.
    let keypair = Keypair::from_secret_bytes(&secret)?;
    if keypair.public_bytes()[..] != public[..] {
        return Err(AkVaultError::InvalidKey(
            "stored public key does not match the signing key".to_string(),
        ));
    }

    debug!(identity = identity.name(), "revealed identity keys");

    Ok(RevealedKeys {
        private_key_hex: hex::encode(&secret[..]),
        public_key_hex: hex::encode(&public[..]),
        public_address: address::encode(&public, ACCOUNT_PREFIX),
    })
}

/// Write `bytes` to `path` through a sibling temp file and a rename.
fn write_blob(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = tmp_path(path);
    fs::write(&tmp, bytes).map_err(|e| AkVaultError::storage(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| AkVaultError::storage(path, e))
}

fn tmp_path(path: &Path) -> std::path::PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Best-effort removal of everything `create_identity` may have written.
fn remove_artifacts(identity: &Identity, created_dir: bool) {
    if created_dir {
        let _ = fs::remove_dir_all(identity.dir());
        return;
    }
    for path in [identity.sign_key_path(), identity.sign_key_pub_path()] {
        let _ = fs::remove_file(tmp_path(&path));
        let _ = fs::remove_file(path);
    }
}
