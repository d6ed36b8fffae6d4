//! Cryptographic operations module.
//!
//! This module provides the cryptographic core of akvault:
//!
//! - Ed25519 keypair generation
//! - Password-based key encryption using Argon2 and AES-256-GCM
//!
//! Decryption is authenticated: a wrong password fails with an error
//! rather than yielding garbage bytes.
//!
//! # Example
//!
//! ```rust
//! use akvault::crypto::ed25519::generate_keypair;
//! use akvault::crypto::encryption::{encrypt_key_material, decrypt_key_material};
//!
//! # fn example() -> akvault::error::Result<()> {
//! // Generate a keypair
//! let keypair = generate_keypair()?;
//!
//! // Encrypt the private key with a password
//! let password = "correct horse battery staple";
//! let encrypted = encrypt_key_material(&keypair.secret_bytes()[..], password)?;
//!
//! // Decrypt it back
//! let decrypted = decrypt_key_material(&encrypted, password)?;
//! assert_eq!(&keypair.secret_bytes()[..], &decrypted[..]);
//! # Ok(())
//! # }
//! ```

pub mod ed25519;
pub mod encryption;
