//! Content fingerprinting for loaded data files.

use sha2::{Digest, Sha256};

/// Calculates the SHA-256 fingerprint of file content.
///
/// The report carries this alongside the row counts so consumers can tell
/// which exact source files a set of figures was computed from.
pub fn fingerprint(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
