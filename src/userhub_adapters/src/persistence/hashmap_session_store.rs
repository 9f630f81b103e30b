use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use userhub_core::{SessionStore, SessionStoreError, UserSession};
use uuid::Uuid;

/// In-memory session store, used by tests and local development.
#[derive(Default, Clone)]
pub struct HashMapSessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, UserSession>>>,
}

impl HashMapSessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl SessionStore for HashMapSessionStore {
    async fn create_session(&self, user_id: Uuid) -> Result<UserSession, SessionStoreError> {
        let session = UserSession {
            id: Uuid::new_v4(),
            user_id,
            created_at: Utc::now(),
        };
        self.sessions.write().await.insert(session.id, session.clone());
        Ok(session)
    }

    async fn get_session(&self, session_id: Uuid) -> Result<UserSession, SessionStoreError> {
        self.sessions
            .read()
            .await
            .get(&session_id)
            .cloned()
            .ok_or(SessionStoreError::SessionNotFound)
    }

    async fn delete_session(&self, session_id: Uuid) -> Result<(), SessionStoreError> {
        self.sessions
            .write()
            .await
            .remove(&session_id)
            .ok_or(SessionStoreError::SessionNotFound)?;
        Ok(())
    }

    async fn sessions_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<UserSession>, SessionStoreError> {
        let sessions = self.sessions.read().await;
        Ok(sessions
            .values()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }
}
