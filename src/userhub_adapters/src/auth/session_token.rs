//! Signed session tokens delivered in an HTTP-only cookie.
//!
//! The token carries the user's email and the id of the `UserSession` row
//! opened at login, so logout can destroy the right record.

use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use userhub_core::Email;
use uuid::Uuid;

#[derive(Clone)]
pub struct SessionTokenConfig {
    pub cookie_name: String,
    pub secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
}

impl SessionTokenConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }
}

#[derive(Debug, Error)]
pub enum SessionTokenError {
    #[error("Missing token")]
    MissingToken,
    #[error("Token error: {0}")]
    TokenError(jsonwebtoken::errors::Error),
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// Claims inside the session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// The authenticated user's email address.
    pub sub: String,
    /// The `UserSession` row this token belongs to.
    pub sid: Uuid,
    pub exp: usize,
}

pub fn extract_token<'a>(
    jar: &'a CookieJar,
    cookie_name: &str,
) -> Result<&'a str, SessionTokenError> {
    match jar.get(cookie_name) {
        Some(cookie) => Ok(cookie.value()),
        None => Err(SessionTokenError::MissingToken),
    }
}

// Create cookie with a newly signed session token
pub fn generate_session_cookie(
    email: &Email,
    session_id: Uuid,
    config: &SessionTokenConfig,
) -> Result<Cookie<'static>, SessionTokenError> {
    let token = generate_session_token(
        email,
        session_id,
        config.token_ttl_in_seconds,
        config.as_bytes(),
    )?;
    Ok(create_session_cookie(token, &config.cookie_name))
}

pub fn create_removal_cookie(cookie_name: &str) -> Cookie<'static> {
    let mut cookie = create_session_cookie(String::new(), cookie_name);
    cookie.make_removal();
    cookie
}

// Create cookie and set the value to the passed-in token string
pub fn create_session_cookie(token: String, cookie_name: &str) -> Cookie<'static> {
    Cookie::build((cookie_name.to_owned(), token))
        .path("/") // apply cookie to all URLs on the server
        .http_only(true) // prevent JavaScript from accessing the cookie
        .same_site(SameSite::Lax)
        .build()
}

// Create a signed session token
pub fn generate_session_token(
    email: &Email,
    session_id: Uuid,
    token_ttl_seconds: i64,
    secret: &[u8],
) -> Result<String, SessionTokenError> {
    let delta = chrono::Duration::try_seconds(token_ttl_seconds).ok_or(
        SessionTokenError::UnexpectedError("Failed to create token duration".to_string()),
    )?;

    let exp = Utc::now()
        .checked_add_signed(delta)
        .ok_or(SessionTokenError::UnexpectedError(
            "Duration out of range".to_string(),
        ))?
        .timestamp();

    let exp: usize = exp
        .try_into()
        .map_err(|_| SessionTokenError::UnexpectedError("Failed to cast i64 to usize".to_string()))?;

    let claims = SessionClaims {
        sub: email.expose().to_owned(),
        sid: session_id,
        exp,
    };

    encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(SessionTokenError::TokenError)
}

// Check that a session token is valid by decoding it with the configured secret
pub fn validate_session_token(
    token: &str,
    config: &SessionTokenConfig,
) -> Result<SessionClaims, SessionTokenError> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(SessionTokenError::TokenError)
}
