//! Integration tests for akvault.
//!
//! These tests verify the complete workflows of the system.

use akvault::address;
use akvault::crypto::ed25519::generate_keypair;
use akvault::crypto::encryption::{decrypt_key_material, encrypt_key_material};
use akvault::error::{AkVaultError, Result};
use akvault::storage::identity::Identity;
use akvault::storage::keystore::{create_identity, reveal_identity};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_create_and_reveal_workflow() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let identity = Identity::new("alice", temp_dir.path());

    // 1. Create the identity
    create_identity(&identity, "correcthorse")?;

    // Exactly two files appear under <dir>/alice
    assert!(identity.sign_key_path().exists());
    assert!(identity.sign_key_pub_path().exists());
    assert_eq!(fs::read_dir(identity.dir()).unwrap().count(), 2);

    // 2. Reveal it with the same password
    let revealed = reveal_identity(&identity, "correcthorse")?;

    assert!(revealed.public_address.starts_with("ak$"));
    assert_eq!(revealed.private_key_hex.len(), 128);
    assert_eq!(revealed.public_key_hex.len(), 64);

    // 3. The address decodes back to the revealed public key
    let (public_bytes, prefix) = address::decode(&revealed.public_address)?;
    assert_eq!(prefix, "ak");
    assert_eq!(hex::encode(public_bytes), revealed.public_key_hex);

    Ok(())
}

#[test]
fn test_reveal_wrong_password_fails_cleanly() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let identity = Identity::new("alice", temp_dir.path());

    create_identity(&identity, "correcthorse")?;

    let result = reveal_identity(&identity, "tr0ub4dor");
    match result {
        Err(AkVaultError::AuthenticationFailed) => {}
        _ => panic!("Expected AuthenticationFailed"),
    }

    // The identity survives the failed attempt
    let revealed = reveal_identity(&identity, "correcthorse")?;
    assert!(revealed.public_address.starts_with("ak$"));

    Ok(())
}

#[test]
fn test_create_refuses_existing_identity() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let identity = Identity::new("alice", temp_dir.path());

    create_identity(&identity, "first-password")?;
    let original_key = fs::read(identity.sign_key_path()).unwrap();
    let original_pub = fs::read(identity.sign_key_pub_path()).unwrap();

    let result = create_identity(&identity, "second-password");
    assert!(matches!(
        result,
        Err(AkVaultError::IdentityAlreadyExists(_))
    ));

    // Nothing was modified
    assert_eq!(fs::read(identity.sign_key_path()).unwrap(), original_key);
    assert_eq!(fs::read(identity.sign_key_pub_path()).unwrap(), original_pub);

    Ok(())
}

#[test]
fn test_encryption_decryption_workflow() -> Result<()> {
    let keypair = generate_keypair()?;
    let secret = keypair.secret_bytes();

    // Encrypt
    let encrypted = encrypt_key_material(&secret[..], "secure-password")?;

    // Decrypt
    let decrypted = decrypt_key_material(&encrypted, "secure-password")?;

    // Verify
    assert_eq!(&secret[..], &decrypted[..]);

    // Wrong password fails deterministically
    let wrong_result = decrypt_key_material(&encrypted, "wrong-password");
    assert!(matches!(
        wrong_result,
        Err(AkVaultError::AuthenticationFailed)
    ));

    Ok(())
}

#[test]
fn test_identity_persistence_across_scopes() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let public_address;

    // Create in one scope
    {
        let identity = Identity::new("persistent", temp_dir.path());
        create_identity(&identity, "password")?;
        public_address = reveal_identity(&identity, "password")?.public_address.clone();
    }

    // Reveal from a fresh handle in another scope
    {
        let identity = Identity::new("persistent", temp_dir.path());
        let revealed = reveal_identity(&identity, "password")?;
        assert_eq!(revealed.public_address, public_address);
    }

    Ok(())
}

#[test]
fn test_address_corruption_is_distinguishable_from_wrong_password() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let identity = Identity::new("alice", temp_dir.path());

    create_identity(&identity, "password")?;
    let revealed = reveal_identity(&identity, "password")?;

    // Corrupt one payload character of the address
    let mut chars: Vec<char> = revealed.public_address.chars().collect();
    let last = chars.len() - 1;
    chars[last] = if chars[last] == '2' { '3' } else { '2' };
    let corrupted: String = chars.into_iter().collect();

    let result = address::decode(&corrupted);
    assert!(matches!(result, Err(AkVaultError::ChecksumMismatch)));

    Ok(())
}

#[test]
fn test_identities_are_isolated() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let alice = Identity::new("alice", temp_dir.path());
    let bob = Identity::new("bob", temp_dir.path());

    create_identity(&alice, "alice-password")?;
    create_identity(&bob, "bob-password")?;

    // Each password opens only its own identity
    assert!(reveal_identity(&alice, "bob-password").is_err());
    assert!(reveal_identity(&bob, "alice-password").is_err());

    let revealed_alice = reveal_identity(&alice, "alice-password")?;
    let revealed_bob = reveal_identity(&bob, "bob-password")?;
    assert_ne!(
        revealed_alice.public_address,
        revealed_bob.public_address
    );

    Ok(())
}
