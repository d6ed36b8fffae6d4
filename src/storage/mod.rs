//! Key storage module.
//!
//! This module persists identities as a pair of password-encrypted files
//! and recovers them for display.

pub mod identity;
pub mod keystore;
