//! Password hashing service backed by bcrypt.

use crate::errors::{DomainError, DomainResult};

/// Default bcrypt work factor
pub const DEFAULT_COST: u32 = 10;

/// One-way adaptive password hasher.
///
/// Every `hash` call salts independently, so equal passwords produce
/// different digests; `verify` goes through bcrypt's own comparison.
/// Raw passwords are never stored or logged by this type.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password into an opaque digest
    pub fn hash(&self, plaintext: &str) -> DomainResult<String> {
        bcrypt::hash(plaintext, self.cost)
            .map_err(|e| DomainError::Internal(format!("password hashing failed: {e}")))
    }

    /// Verify a candidate password against a stored digest
    pub fn verify(&self, plaintext: &str, digest: &str) -> DomainResult<bool> {
        bcrypt::verify(plaintext, digest)
            .map_err(|e| DomainError::Internal(format!("password verification failed: {e}")))
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Cost 4 is bcrypt's minimum; keeps the test suite fast while
    // exercising the same code path as the production cost of 10.
    fn hasher() -> PasswordHasher {
        PasswordHasher::new(4)
    }

    #[test]
    fn hash_then_verify_round_trips() {
        let hasher = hasher();
        let digest = hasher.hash("pw123456").unwrap();
        assert!(hasher.verify("pw123456", &digest).unwrap());
    }

    #[test]
    fn wrong_password_fails_verification() {
        let hasher = hasher();
        let digest = hasher.hash("pw123456").unwrap();
        assert!(!hasher.verify("pw123457", &digest).unwrap());
    }

    #[test]
    fn equal_passwords_hash_to_different_digests() {
        let hasher = hasher();
        let first = hasher.hash("pw123456").unwrap();
        let second = hasher.hash("pw123456").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn default_cost_matches_policy() {
        assert_eq!(DEFAULT_COST, 10);
    }
}
