use userhub_core::{
    Email, NewUser, Password, PasswordHasher, PasswordHasherError, User, UserStore, UserStoreError,
};

/// Error types specific to the register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Hasher error: {0}")]
    HasherError(#[from] PasswordHasherError),
}

/// Register use case - creates a user account.
///
/// The plaintext password is hashed here, before the store is involved, so
/// no store implementation ever sees or persists a plaintext password.
pub struct RegisterUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: &'a U,
    hasher: &'a H,
}

impl<'a, U, H> RegisterUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(user_store: &'a U, hasher: &'a H) -> Self {
        Self { user_store, hasher }
    }

    /// Execute the register use case
    ///
    /// # Returns
    /// The created user, or `UserStoreError::EmailAlreadyUsed` wrapped in
    /// `RegisterError` when the address is taken.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, password))]
    pub async fn execute(&self, email: Email, password: Password) -> Result<User, RegisterError> {
        let password_hash = self.hasher.hash_password(&password)?;

        let user = self
            .user_store
            .add_user(NewUser {
                email,
                password_hash,
            })
            .await?;

        Ok(user)
    }
}
