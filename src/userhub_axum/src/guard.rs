//! Login guard middleware.
//!
//! Routes are denied by default: everything outside the public allow-list
//! (login and, for now, registration) sits behind this middleware. A
//! request without a valid session token is redirected to the login form.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use userhub_adapters::auth::session_token::{extract_token, validate_session_token};
use userhub_core::{SessionStore, SessionStoreError};

use crate::routes::{LOGIN_PATH, RouterConfig};

/// A signed token alone is not enough: the session record it references
/// must still exist, so that logout revokes cookies a client kept around.
pub async fn require_login<S>(
    State((session_store, config)): State<(S, RouterConfig)>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response
where
    S: SessionStore + Clone + 'static,
{
    let claims = match extract_token(&jar, &config.tokens.cookie_name)
        .and_then(|token| validate_session_token(token, &config.tokens))
    {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!("denying unauthenticated request: {e}");
            return Redirect::to(LOGIN_PATH).into_response();
        }
    };

    match session_store.get_session(claims.sid).await {
        Ok(_) => {
            // Make the verified identity available to the handlers.
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(SessionStoreError::SessionNotFound) => {
            tracing::debug!("denying request for a destroyed session");
            Redirect::to(LOGIN_PATH).into_response()
        }
        Err(e) => {
            tracing::error!("session lookup failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
