use userhub_core::{
    Email, Password, PasswordHasher, SessionStore, SessionStoreError, UserStore, UserStoreError,
};
use uuid::Uuid;

/// The result of a successful login: identity plus the session record
/// created for it.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: Email,
    pub session_id: Uuid,
}

/// Error types specific to the login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// Unknown email, wrong password and disabled account all collapse into
    /// this variant; the client can not tell them apart.
    #[error("Incorrect email or password.")]
    InvalidCredentials,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
}

/// Login use case - verifies credentials and opens a session.
pub struct LoginUseCase<U, S, H>
where
    U: UserStore,
    S: SessionStore,
    H: PasswordHasher,
{
    user_store: U,
    session_store: S,
    hasher: H,
}

impl<U, S, H> LoginUseCase<U, S, H>
where
    U: UserStore,
    S: SessionStore,
    H: PasswordHasher,
{
    pub fn new(user_store: U, session_store: S, hasher: H) -> Self {
        Self {
            user_store,
            session_store,
            hasher,
        }
    }

    /// Execute the login use case
    ///
    /// Credentials must match a non-deleted user. On success a
    /// `UserSession` row is recorded and returned as part of the identity.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
    ) -> Result<AuthenticatedUser, LoginError> {
        let user = match self.user_store.get_user(&email).await {
            Ok(user) => user,
            Err(UserStoreError::UserNotFound) => return Err(LoginError::InvalidCredentials),
            Err(e) => return Err(LoginError::UserStoreError(e)),
        };

        // Disabled users can not sign in, no matter the credentials.
        if user.is_deleted {
            return Err(LoginError::InvalidCredentials);
        }

        if !self.hasher.verify_password(&password, &user.password_hash) {
            return Err(LoginError::InvalidCredentials);
        }

        let session = self.session_store.create_session(user.id).await?;

        Ok(AuthenticatedUser {
            user_id: user.id,
            email: user.email,
            session_id: session.id,
        })
    }
}
