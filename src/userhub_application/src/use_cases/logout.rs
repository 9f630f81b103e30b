use userhub_core::{SessionStore, SessionStoreError};
use uuid::Uuid;

/// Error types for logout use case
#[derive(Debug, thiserror::Error)]
pub enum LogoutError {
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
}

/// Logout use case - destroys the session record behind an auth cookie.
pub struct LogoutUseCase<S>
where
    S: SessionStore,
{
    session_store: S,
}

impl<S> LogoutUseCase<S>
where
    S: SessionStore,
{
    pub fn new(session_store: S) -> Self {
        Self { session_store }
    }

    /// Execute the logout use case
    ///
    /// A cookie can outlive its session row, so a missing session is
    /// treated as already logged out.
    #[tracing::instrument(name = "LogoutUseCase::execute", skip(self))]
    pub async fn execute(&self, session_id: Uuid) -> Result<(), LogoutError> {
        match self.session_store.delete_session(session_id).await {
            Ok(()) | Err(SessionStoreError::SessionNotFound) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
