use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{email::Email, password_hash::PasswordHash};

/// A persisted user account.
///
/// Deletion is logical: `is_deleted` flips to `true` and the row stays.
/// A deleted user can no longer authenticate.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a user. The password is already hashed by the time
/// a store sees it.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub password_hash: PasswordHash,
}

/// A partial update to an existing user.
///
/// `password_hash: None` means "password not supplied": every store must
/// leave the stored hash untouched in that case, so re-saving a user
/// without a password never re-hashes or clears anything.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub password_hash: Option<PasswordHash>,
}
