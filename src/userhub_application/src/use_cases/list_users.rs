use userhub_core::{User, UserStore, UserStoreError};

/// List users use case.
///
/// Returns full `User` records; the HTTP layer decides what to expose
/// (never the hash).
pub struct ListUsersUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> ListUsersUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "ListUsersUseCase::execute", skip(self))]
    pub async fn execute(&self) -> Result<Vec<User>, UserStoreError> {
        let mut users = self.user_store.list_users().await?;
        users.sort_by_key(|u| u.created_at);
        Ok(users)
    }
}
