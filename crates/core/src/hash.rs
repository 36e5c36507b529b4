//! Content-addressed dedup key generation.

use sha2::{Digest, Sha256};

/// Length of a hex-encoded SHA-256 digest.
pub const URL_HASH_LEN: usize = 64;

/// Compute the dedup key for a canonical URL.
pub fn url_hash(canonical: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}

/// Whether `s` has the shape of a [`url_hash`] output: 64 lowercase hex characters.
pub fn is_url_hash(s: &str) -> bool {
    s.len() == URL_HASH_LEN && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_stability() {
        let hash1 = url_hash("https://example.com/");
        let hash2 = url_hash("https://example.com/");
        assert_eq!(hash1, hash2);
    }

    #[test]
    fn test_hash_different_input() {
        assert_ne!(url_hash("https://example.com/path1"), url_hash("https://example.com/path2"));
    }

    #[test]
    fn test_hash_known_vector() {
        assert_eq!(url_hash(""), "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");
    }

    #[test]
    fn test_hash_format() {
        let hash = url_hash("https://example.com/");
        assert_eq!(hash.len(), 64);
        assert!(is_url_hash(&hash));
    }

    #[test]
    fn test_is_url_hash_rejects_uppercase_and_short() {
        let hash = url_hash("https://example.com/");
        assert!(!is_url_hash(&hash.to_uppercase()));
        assert!(!is_url_hash(&hash[..63]));
        assert!(!is_url_hash(""));
    }
}
