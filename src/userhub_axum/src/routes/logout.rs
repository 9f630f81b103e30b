//! Logout route: destroy the session record, clear the cookie, go to login.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::CookieJar;
use thiserror::Error;
use userhub_adapters::auth::session_token::{
    create_removal_cookie, extract_token, validate_session_token,
};
use userhub_application::{LogoutError, LogoutUseCase};
use userhub_core::SessionStore;

use crate::routes::{LOGIN_PATH, RouterConfig};

#[tracing::instrument(name = "Logout", skip(session_store, config, jar))]
pub async fn logout<S>(
    State((session_store, config)): State<(S, RouterConfig)>,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect), LogoutRouteError>
where
    S: SessionStore + Clone + 'static,
{
    // The guard has already validated the token; re-read it here to learn
    // which session record to destroy.
    if let Ok(claims) = extract_token(&jar, &config.tokens.cookie_name)
        .and_then(|token| validate_session_token(token, &config.tokens))
    {
        LogoutUseCase::new(session_store).execute(claims.sid).await?;
    }

    let jar = jar.add(create_removal_cookie(&config.tokens.cookie_name));
    Ok((jar, Redirect::to(LOGIN_PATH)))
}

#[derive(Debug, Error)]
pub enum LogoutRouteError {
    #[error("Logout failed: {0}")]
    Logout(#[from] LogoutError),
}

impl IntoResponse for LogoutRouteError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("{self}");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
