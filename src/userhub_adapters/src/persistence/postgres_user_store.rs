use chrono::{DateTime, Utc};
use secrecy::Secret;
use sqlx::PgPool;
use userhub_core::{Email, NewUser, PasswordHash, User, UserStore, UserStoreError, UserUpdate};
use uuid::Uuid;

/// Postgres-backed user store.
///
/// Email uniqueness is enforced by the unique index on `users.email`; the
/// resulting constraint violation is mapped to `EmailAlreadyUsed`.
#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    password_hash: String,
    is_deleted: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> Result<User, UserStoreError> {
        let email = Email::try_from(Secret::new(self.email))
            .map_err(|e| UserStoreError::UnexpectedError(format!("invalid email in row: {e}")))?;
        Ok(User {
            id: self.id,
            email,
            password_hash: PasswordHash::from_stored(self.password_hash),
            is_deleted: self.is_deleted,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn map_sqlx_error(e: sqlx::Error) -> UserStoreError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => UserStoreError::EmailAlreadyUsed,
        sqlx::Error::RowNotFound => UserStoreError::UserNotFound,
        _ => UserStoreError::UnexpectedError(e.to_string()),
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "PostgresUserStore::add_user", skip(self, new_user))]
    async fn add_user(&self, new_user: NewUser) -> Result<User, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, email, password_hash, is_deleted, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new_user.email.expose())
        .bind(new_user.password_hash.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.into_user()
    }

    #[tracing::instrument(name = "PostgresUserStore::get_user", skip(self, email))]
    async fn get_user(&self, email: &Email) -> Result<User, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, is_deleted, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.expose())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.ok_or(UserStoreError::UserNotFound)?.into_user()
    }

    #[tracing::instrument(name = "PostgresUserStore::list_users", skip(self))]
    async fn list_users(&self) -> Result<Vec<User>, UserStoreError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, is_deleted, created_at, updated_at
            FROM users
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(UserRow::into_user).collect()
    }

    #[tracing::instrument(name = "PostgresUserStore::update_user", skip(self, email, update))]
    async fn update_user(
        &self,
        email: &Email,
        update: UserUpdate,
    ) -> Result<User, UserStoreError> {
        // COALESCE keeps the stored hash when no new one is supplied.
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET password_hash = COALESCE($2, password_hash),
                updated_at = now()
            WHERE email = $1
            RETURNING id, email, password_hash, is_deleted, created_at, updated_at
            "#,
        )
        .bind(email.expose())
        .bind(update.password_hash.map(PasswordHash::into_string))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.ok_or(UserStoreError::UserNotFound)?.into_user()
    }

    #[tracing::instrument(name = "PostgresUserStore::mark_deleted", skip(self, email))]
    async fn mark_deleted(&self, email: &Email) -> Result<(), UserStoreError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET is_deleted = TRUE,
                updated_at = now()
            WHERE email = $1
            "#,
        )
        .bind(email.expose())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(UserStoreError::UserNotFound);
        }
        Ok(())
    }
}
