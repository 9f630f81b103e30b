use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{
    email::Email,
    session::UserSession,
    user::{NewUser, User, UserUpdate},
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("This email address has already been used.")]
    EmailAlreadyUsed,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::EmailAlreadyUsed, Self::EmailAlreadyUsed) => true,
            (Self::UserNotFound, Self::UserNotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Persistence interface for user accounts.
///
/// Email uniqueness is enforced here (unique index in Postgres, map key in
/// the in-memory store), and the `UserUpdate` contract holds for every
/// implementation: an absent password hash leaves the stored one untouched.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn add_user(&self, new_user: NewUser) -> Result<User, UserStoreError>;
    async fn get_user(&self, email: &Email) -> Result<User, UserStoreError>;
    async fn list_users(&self) -> Result<Vec<User>, UserStoreError>;
    async fn update_user(&self, email: &Email, update: UserUpdate)
    -> Result<User, UserStoreError>;
    /// Logical deletion: flips `is_deleted`, never removes the row.
    async fn mark_deleted(&self, email: &Email) -> Result<(), UserStoreError>;
}

// SessionStore port trait and errors
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Session not found")]
    SessionNotFound,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for SessionStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::SessionNotFound, Self::SessionNotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Persistence interface for login session records.
///
/// A session token is only honored while its record exists; deleting the
/// record revokes every cookie that references it.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create_session(&self, user_id: Uuid) -> Result<UserSession, SessionStoreError>;
    async fn get_session(&self, session_id: Uuid) -> Result<UserSession, SessionStoreError>;
    async fn delete_session(&self, session_id: Uuid) -> Result<(), SessionStoreError>;
    async fn sessions_for_user(&self, user_id: Uuid)
    -> Result<Vec<UserSession>, SessionStoreError>;
}
