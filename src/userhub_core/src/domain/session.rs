use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A login session record owned by a [`crate::User`].
///
/// One row is created per successful login and removed again on logout.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}
