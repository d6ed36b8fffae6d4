//! akvault: an Ed25519 account key vault.
//!
//! This library manages the key material behind a blockchain-style
//! identity. It enables users to:
//!
//! - Generate Ed25519 keypairs from the OS entropy source
//! - Store both halves of a keypair password-encrypted on disk
//!   (Argon2 key derivation + AES-256-GCM)
//! - Render public keys as checksummed, typo-resistant `ak$…` addresses
//!
//! # Architecture
//!
//! Operations are composed from small, testable functions and return
//! `Result` types with comprehensive error handling - no `unwrap()` or
//! panic outside tests. Plaintext key material lives in zeroized buffers
//! and never escapes the operation that produced it except as an
//! encrypted blob or an explicitly revealed display string.
//!
//! # Example
//!
//! ```rust,no_run
//! use akvault::storage::identity::Identity;
//! use akvault::storage::keystore::{create_identity, reveal_identity};
//! use akvault::error::Result;
//!
//! fn example() -> Result<()> {
//!     let identity = Identity::new("alice", "/keys");
//!     create_identity(&identity, "correct horse battery staple")?;
//!
//!     let revealed = reveal_identity(&identity, "correct horse battery staple")?;
//!     println!("Public key (base check): {}", revealed.public_address);
//!     Ok(())
//! }
//! ```

pub mod address;
pub mod crypto;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use error::{AkVaultError, Result};
