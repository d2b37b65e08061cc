//! Content hashing using SHA-256

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::core::error::{CollectError, Result};

/// Number of hex characters of the digest embedded in destination names
pub const SHORT_HASH_LEN: usize = 8;

/// Hex-encoded SHA-256 digest of a file's full content
///
/// Used as a deduplication key only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    /// Hash an in-memory buffer
    pub fn from_bytes(data: &[u8]) -> Self {
        Self(format!("{:x}", Sha256::digest(data)))
    }

    /// Get the full hex string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 8 hex characters of the digest
    pub fn short(&self) -> &str {
        &self.0[..SHORT_HASH_LEN]
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Compute the SHA-256 hash of a file without buffering it whole
///
/// # Arguments
/// * `path` - Path to the file
///
/// # Returns
/// The file's `ContentHash`
pub fn compute_file_hash(path: &Path) -> Result<ContentHash> {
    let read_err = |source: std::io::Error| CollectError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(read_err)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = file.read(&mut buffer).map_err(read_err)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(ContentHash(format!("{:x}", hasher.finalize())))
}
