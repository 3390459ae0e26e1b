use bcrypt::{DEFAULT_COST, hash, verify};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("failed to hash password: {0}")]
    Hashing(#[source] bcrypt::BcryptError),
    #[error("failed to verify password: {0}")]
    Verify(#[source] bcrypt::BcryptError),
}

/// Hashes the password with surrounding whitespace removed.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    hash(password.trim(), DEFAULT_COST).map_err(PasswordError::Hashing)
}

/// Checks a candidate against a stored hash.
///
/// A mismatch is `Ok(false)`; only a malformed hash is an error.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    verify(password.trim(), hash).map_err(PasswordError::Verify)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_not_plaintext() {
        let hash = hash_password("secret123").unwrap();
        assert_ne!(hash, "secret123");
        assert!(hash.starts_with("$2"));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let hash = hash_password("  secret123\n").unwrap();
        assert!(verify_password("secret123", &hash).unwrap());
        assert!(verify_password(" secret123 ", &hash).unwrap());
    }

    #[test]
    fn test_corrupt_hash_is_error() {
        let result = verify_password("secret123", "$2b$12$tooshort");
        assert!(matches!(result, Err(PasswordError::Verify(_))));
    }
}
