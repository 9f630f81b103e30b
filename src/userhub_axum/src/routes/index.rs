//! User listing route.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use userhub_application::ListUsersUseCase;
use userhub_core::{User, UserStore, UserStoreError};
use uuid::Uuid;

/// What the listing exposes per user. Never the password hash.
#[derive(Debug, Serialize)]
pub struct UserListEntry {
    pub id: Uuid,
    pub email: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserListEntry {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email.expose().to_owned(),
            is_deleted: user.is_deleted,
            created_at: user.created_at,
        }
    }
}

#[tracing::instrument(name = "ListUsers", skip(user_store))]
pub async fn index<U>(State(user_store): State<U>) -> Result<Json<Vec<UserListEntry>>, IndexError>
where
    U: UserStore + Clone + 'static,
{
    let users = ListUsersUseCase::new(&user_store).execute().await?;

    Ok(Json(users.into_iter().map(UserListEntry::from).collect()))
}

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Failed to list users: {0}")]
    Store(#[from] UserStoreError),
}

impl IntoResponse for IndexError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("{self}");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
