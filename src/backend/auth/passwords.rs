//! Password Hashing
//!
//! One-way, salted, cost-factored hashing via bcrypt. Comparison goes
//! through bcrypt's own verify, never string equality.

use crate::backend::error::ApiError;

/// Hash a plaintext password for storage
///
/// Uses bcrypt with `DEFAULT_COST`. The result embeds the salt and cost
/// factor, so verification needs no extra state.
pub fn hash_password(plaintext: &str) -> Result<String, ApiError> {
    Ok(bcrypt::hash(plaintext, bcrypt::DEFAULT_COST)?)
}

/// Verify a plaintext password against a stored hash
pub fn verify_password(plaintext: &str, hash: &str) -> Result<bool, ApiError> {
    Ok(bcrypt::verify(plaintext, hash)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Low cost keeps tests fast; production path uses DEFAULT_COST.
    fn quick_hash(plaintext: &str) -> String {
        bcrypt::hash(plaintext, 4).unwrap()
    }

    #[test]
    fn test_hash_is_not_plaintext() {
        let hash = hash_password("correct horse battery").unwrap();
        assert_ne!(hash, "correct horse battery");
        assert!(hash.starts_with("$2"));
    }

    #[test]
    fn test_verify_matches() {
        let hash = quick_hash("secret123");
        assert!(verify_password("secret123", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let hash = quick_hash("secret123");
        assert!(!verify_password("not-the-password", &hash).unwrap());
    }

    #[test]
    fn test_same_password_different_hashes() {
        // Salting: two hashes of the same input differ
        assert_ne!(quick_hash("secret123"), quick_hash("secret123"));
    }
}
