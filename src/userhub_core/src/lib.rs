pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email::{Email, EmailError},
    password::{MIN_PASSWORD_LENGTH, Password, PasswordError},
    password_hash::PasswordHash,
    session::UserSession,
    user::{NewUser, User, UserUpdate},
};

pub use ports::{
    hasher::{PasswordHasher, PasswordHasherError},
    repositories::{SessionStore, SessionStoreError, UserStore, UserStoreError},
};
