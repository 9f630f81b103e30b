pub mod hashmap_session_store;
pub mod hashmap_user_store;
pub mod postgres_session_store;
pub mod postgres_user_store;

pub use hashmap_session_store::HashMapSessionStore;
pub use hashmap_user_store::HashMapUserStore;
pub use postgres_session_store::PostgresSessionStore;
pub use postgres_user_store::PostgresUserStore;
