pub mod auth;
pub mod config;
pub mod persistence;
pub mod security;

pub use auth::session_token::{
    SessionClaims, SessionTokenConfig, SessionTokenError, create_removal_cookie,
    generate_session_cookie, validate_session_token,
};
pub use persistence::{
    HashMapSessionStore, HashMapUserStore, PostgresSessionStore, PostgresUserStore,
};
pub use security::BcryptHasher;
