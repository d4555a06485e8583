//! Snippet hashing using SHA-256.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hex digest of a snippet.
///
/// The digest identifies the analyzed code in responses and logs without
/// echoing the snippet itself.
pub fn snippet_hash(snippet: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(snippet.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_deterministic() {
        let a = snippet_hash("SELECT * FROM users");
        let b = snippet_hash("SELECT * FROM users");
        assert_eq!(a, b);
    }

    #[test]
    fn test_hash_differs_per_input() {
        assert_ne!(snippet_hash("a"), snippet_hash("b"));
    }

    #[test]
    fn test_hash_is_64_hex_chars() {
        let digest = snippet_hash("console.log('hi')");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
