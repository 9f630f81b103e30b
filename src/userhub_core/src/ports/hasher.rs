use thiserror::Error;

use crate::domain::{password::Password, password_hash::PasswordHash};

#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Failed to hash password: {0}")]
    HashingFailed(String),
}

/// One-way password hashing.
///
/// `hash_password` must salt, so two hashes of the same plaintext differ and
/// the output is never equal to the input. `verify_password` is the only way
/// to check a plaintext against a stored hash.
pub trait PasswordHasher: Send + Sync {
    fn hash_password(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError>;
    fn verify_password(&self, candidate: &Password, hash: &PasswordHash) -> bool;
}
