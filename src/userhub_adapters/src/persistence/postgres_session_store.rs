use chrono::{DateTime, Utc};
use sqlx::PgPool;
use userhub_core::{SessionStore, SessionStoreError, UserSession};
use uuid::Uuid;

/// Postgres-backed session store.
#[derive(Clone)]
pub struct PostgresSessionStore {
    pool: PgPool,
}

impl PostgresSessionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    id: Uuid,
    user_id: Uuid,
    created_at: DateTime<Utc>,
}

impl From<SessionRow> for UserSession {
    fn from(row: SessionRow) -> Self {
        UserSession {
            id: row.id,
            user_id: row.user_id,
            created_at: row.created_at,
        }
    }
}

#[async_trait::async_trait]
impl SessionStore for PostgresSessionStore {
    #[tracing::instrument(name = "PostgresSessionStore::create_session", skip(self))]
    async fn create_session(&self, user_id: Uuid) -> Result<UserSession, SessionStoreError> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            INSERT INTO user_sessions (id, user_id)
            VALUES ($1, $2)
            RETURNING id, user_id, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| SessionStoreError::UnexpectedError(e.to_string()))?;

        Ok(row.into())
    }

    #[tracing::instrument(name = "PostgresSessionStore::get_session", skip(self))]
    async fn get_session(&self, session_id: Uuid) -> Result<UserSession, SessionStoreError> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT id, user_id, created_at
            FROM user_sessions
            WHERE id = $1
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| SessionStoreError::UnexpectedError(e.to_string()))?;

        row.map(Into::into).ok_or(SessionStoreError::SessionNotFound)
    }

    #[tracing::instrument(name = "PostgresSessionStore::delete_session", skip(self))]
    async fn delete_session(&self, session_id: Uuid) -> Result<(), SessionStoreError> {
        let result = sqlx::query("DELETE FROM user_sessions WHERE id = $1")
            .bind(session_id)
            .execute(&self.pool)
            .await
            .map_err(|e| SessionStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(SessionStoreError::SessionNotFound);
        }
        Ok(())
    }

    #[tracing::instrument(name = "PostgresSessionStore::sessions_for_user", skip(self))]
    async fn sessions_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<UserSession>, SessionStoreError> {
        let rows = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT id, user_id, created_at
            FROM user_sessions
            WHERE user_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| SessionStoreError::UnexpectedError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
