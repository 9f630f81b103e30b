use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

/// Minimum plaintext password length, enforced at parse time.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A plaintext password that passed validation.
///
/// Only ever held in memory on its way into the hasher; the stored
/// representation is always a [`crate::PasswordHash`].
#[derive(Clone)]
pub struct Password(Secret<String>);

#[derive(Debug, Error, PartialEq)]
pub enum PasswordError {
    #[error("A password should be at least {0} characters long.")]
    TooShort(usize),
}

impl Password {
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = PasswordError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().chars().count() < MIN_PASSWORD_LENGTH {
            return Err(PasswordError::TooShort(MIN_PASSWORD_LENGTH));
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}
