//! Shared mock stores for use case tests.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use userhub_core::{
    Email, NewUser, Password, PasswordHash, PasswordHasher, PasswordHasherError, SessionStore,
    SessionStoreError, User, UserSession, UserStore, UserStoreError, UserUpdate,
};
use uuid::Uuid;

use secrecy::Secret;

pub fn email(s: &str) -> Email {
    Email::try_from(Secret::new(s.to_owned())).unwrap()
}

pub fn password(s: &str) -> Password {
    Password::try_from(Secret::new(s.to_owned())).unwrap()
}

/// Reversible fake hasher so tests can assert on the produced hash.
#[derive(Clone)]
pub struct FakeHasher;

impl PasswordHasher for FakeHasher {
    fn hash_password(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError> {
        Ok(PasswordHash::from_stored(format!(
            "fake${}",
            password.expose()
        )))
    }

    fn verify_password(&self, candidate: &Password, hash: &PasswordHash) -> bool {
        hash.as_str() == format!("fake${}", candidate.expose())
    }
}

#[derive(Clone, Default)]
pub struct MockUserStore {
    pub users: Arc<RwLock<HashMap<Email, User>>>,
}

impl MockUserStore {
    pub async fn insert(&self, email: Email, hash: &str, is_deleted: bool) -> User {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: email.clone(),
            password_hash: PasswordHash::from_stored(hash.to_owned()),
            is_deleted,
            created_at: now,
            updated_at: now,
        };
        self.users.write().await.insert(email, user.clone());
        user
    }
}

#[async_trait::async_trait]
impl UserStore for MockUserStore {
    async fn add_user(&self, new_user: NewUser) -> Result<User, UserStoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(&new_user.email) {
            return Err(UserStoreError::EmailAlreadyUsed);
        }
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: new_user.email.clone(),
            password_hash: new_user.password_hash,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        };
        users.insert(new_user.email, user.clone());
        Ok(user)
    }

    async fn get_user(&self, email: &Email) -> Result<User, UserStoreError> {
        self.users
            .read()
            .await
            .get(email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn list_users(&self) -> Result<Vec<User>, UserStoreError> {
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn update_user(
        &self,
        email: &Email,
        update: UserUpdate,
    ) -> Result<User, UserStoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(email).ok_or(UserStoreError::UserNotFound)?;
        if let Some(hash) = update.password_hash {
            user.password_hash = hash;
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn mark_deleted(&self, email: &Email) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(email).ok_or(UserStoreError::UserNotFound)?;
        user.is_deleted = true;
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockSessionStore {
    pub sessions: Arc<RwLock<Vec<UserSession>>>,
}

#[async_trait::async_trait]
impl SessionStore for MockSessionStore {
    async fn create_session(&self, user_id: Uuid) -> Result<UserSession, SessionStoreError> {
        let session = UserSession {
            id: Uuid::new_v4(),
            user_id,
            created_at: Utc::now(),
        };
        self.sessions.write().await.push(session.clone());
        Ok(session)
    }

    async fn get_session(&self, session_id: Uuid) -> Result<UserSession, SessionStoreError> {
        self.sessions
            .read()
            .await
            .iter()
            .find(|s| s.id == session_id)
            .cloned()
            .ok_or(SessionStoreError::SessionNotFound)
    }

    async fn delete_session(&self, session_id: Uuid) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|s| s.id != session_id);
        if sessions.len() == before {
            return Err(SessionStoreError::SessionNotFound);
        }
        Ok(())
    }

    async fn sessions_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<UserSession>, SessionStoreError> {
        Ok(self
            .sessions
            .read()
            .await
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }
}
