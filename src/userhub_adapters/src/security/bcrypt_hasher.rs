use userhub_core::{Password, PasswordHash, PasswordHasher, PasswordHasherError};

/// Bcrypt-backed password hasher.
///
/// Bcrypt embeds a random salt in every hash, so hashing the same
/// plaintext twice produces different strings and the stored value is
/// never the plaintext itself. The cost factor is configurable; tests use
/// the minimum to stay fast.
#[derive(Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash_password(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError> {
        bcrypt::hash(password.expose(), self.cost)
            .map(PasswordHash::from_stored)
            .map_err(|e| PasswordHasherError::HashingFailed(e.to_string()))
    }

    fn verify_password(&self, candidate: &Password, hash: &PasswordHash) -> bool {
        bcrypt::verify(candidate.expose(), hash.as_str()).unwrap_or(false)
    }
}
