use userhub_core::{
    Email, Password, PasswordHasher, PasswordHasherError, User, UserStore, UserStoreError,
    UserUpdate,
};

/// Error types specific to the update profile use case
#[derive(Debug, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Hasher error: {0}")]
    HasherError(#[from] PasswordHasherError),
}

/// Update profile use case - re-saves a user with an optional new password.
///
/// When no password is supplied the stored hash must come back unchanged;
/// the `Option` on `UserUpdate::password_hash` carries that through to the
/// store. Hashing only happens for a freshly supplied plaintext, so an
/// already-hashed value is never hashed again.
pub struct UpdateProfileUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: &'a U,
    hasher: &'a H,
}

impl<'a, U, H> UpdateProfileUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(user_store: &'a U, hasher: &'a H) -> Self {
        Self { user_store, hasher }
    }

    #[tracing::instrument(name = "UpdateProfileUseCase::execute", skip(self, new_password))]
    pub async fn execute(
        &self,
        email: &Email,
        new_password: Option<Password>,
    ) -> Result<User, UpdateProfileError> {
        let password_hash = match new_password {
            Some(password) => Some(self.hasher.hash_password(&password)?),
            None => None,
        };

        let user = self
            .user_store
            .update_user(email, UserUpdate { password_hash })
            .await?;

        Ok(user)
    }
}
