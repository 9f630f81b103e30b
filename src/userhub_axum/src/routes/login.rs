//! Login routes: the form and the credential check.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
};
use axum_extra::extract::CookieJar;
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;
use userhub_adapters::{SessionTokenError, generate_session_cookie};
use userhub_application::{LoginError, LoginUseCase};
use userhub_core::{
    Email, Password, PasswordHasher, SessionStore, SessionStoreError, UserStore, UserStoreError,
};

use crate::{
    flash::{Flash, set_flash, take_flash},
    pages,
    routes::{LOGIN_PATH, RouterConfig},
};

pub async fn login_form(jar: CookieJar) -> (CookieJar, Html<String>) {
    let (jar, flash) = take_flash(jar);
    (jar, pages::login_page(flash))
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

/// Authenticate a user from the login form.
///
/// Success sets the auth cookie and redirects to the configured post-login
/// destination; any credential failure re-displays the form with the same
/// generic message.
#[tracing::instrument(name = "Login", skip(user_store, session_store, hasher, config, jar, form))]
pub async fn login<U, S, H>(
    State((user_store, session_store, hasher, config)): State<(U, S, H, RouterConfig)>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<(CookieJar, Redirect), LoginRouteError>
where
    U: UserStore + Clone + 'static,
    S: SessionStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    // Malformed input gets the same response as wrong credentials.
    let Ok(email) = Email::try_from(form.email) else {
        return Ok(redisplay(jar));
    };
    let Ok(password) = Password::try_from(form.password) else {
        return Ok(redisplay(jar));
    };

    match LoginUseCase::new(user_store, session_store, hasher)
        .execute(email, password)
        .await
    {
        Ok(authenticated) => {
            let cookie = generate_session_cookie(
                &authenticated.email,
                authenticated.session_id,
                &config.tokens,
            )?;
            Ok((jar.add(cookie), Redirect::to(&config.login_redirect)))
        }
        Err(LoginError::InvalidCredentials) => Ok(redisplay(jar)),
        Err(LoginError::UserStoreError(e)) => Err(LoginRouteError::Store(e)),
        Err(LoginError::SessionStoreError(e)) => Err(LoginRouteError::Sessions(e)),
    }
}

fn redisplay(jar: CookieJar) -> (CookieJar, Redirect) {
    (set_flash(jar, Flash::BadCredentials), Redirect::to(LOGIN_PATH))
}

#[derive(Debug, Error)]
pub enum LoginRouteError {
    #[error("User store error: {0}")]
    Store(UserStoreError),
    #[error("Session store error: {0}")]
    Sessions(SessionStoreError),
    #[error("Failed to issue session token: {0}")]
    Token(#[from] SessionTokenError),
}

impl IntoResponse for LoginRouteError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("{self}");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
