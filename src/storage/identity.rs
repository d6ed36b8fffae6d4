//! Named identities and their on-disk layout.
//!
//! An identity `name` under a base directory maps to two files:
//!
//! ```text
//! <base>/<name>/sign_key       encrypted private key
//! <base>/<name>/sign_key.pub   encrypted public key
//! ```

use std::path::{Path, PathBuf};

/// File name of the encrypted private key.
pub const SIGN_KEY_FILE: &str = "sign_key";

/// File name of the encrypted public key.
pub const SIGN_KEY_PUB_FILE: &str = "sign_key.pub";

/// A named identity rooted at a base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    name: String,
    base_dir: PathBuf,
}

impl Identity {
    /// Create an identity handle. This does not touch the filesystem.
    pub fn new(name: impl Into<String>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            base_dir: base_dir.into(),
        }
    }

    /// The identity's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The directory holding this identity's key files.
    pub fn dir(&self) -> PathBuf {
        self.base_dir.join(&self.name)
    }

    /// Path of the encrypted private key file.
    pub fn sign_key_path(&self) -> PathBuf {
        self.dir().join(SIGN_KEY_FILE)
    }

    /// Path of the encrypted public key file.
    pub fn sign_key_pub_path(&self) -> PathBuf {
        self.dir().join(SIGN_KEY_PUB_FILE)
    }

    /// Whether both key files are present on disk.
    pub fn exists(&self) -> bool {
        self.sign_key_path().exists() && self.sign_key_pub_path().exists()
    }

    /// Whether either key file is present on disk. A lone file counts:
    /// a half-written identity must block creation just like a complete
    /// one.
    pub fn has_any_key_file(&self) -> bool {
        self.sign_key_path().exists() || self.sign_key_pub_path().exists()
    }

    /// The base directory this identity is rooted at.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}
