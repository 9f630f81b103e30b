//! Profile edit routes for the signed-in user.

use axum::{
    Extension, Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
};
use axum_extra::extract::CookieJar;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use thiserror::Error;
use userhub_adapters::SessionClaims;
use userhub_application::{UpdateProfileError, UpdateProfileUseCase};
use userhub_core::{Email, Password, PasswordHasher, UserStore};

use crate::{
    flash::{Flash, set_flash, take_flash},
    pages,
    routes::{EDIT_PATH, USERS_PATH},
};

pub async fn edit_form(
    Extension(claims): Extension<SessionClaims>,
    jar: CookieJar,
) -> (CookieJar, Html<String>) {
    let (jar, flash) = take_flash(jar);
    (jar, pages::edit_page(&claims.sub, flash))
}

#[derive(Debug, Deserialize)]
pub struct EditForm {
    /// Absent or empty means "keep the current password".
    pub password: Option<Secret<String>>,
}

/// Re-save the signed-in user with an optional new password.
///
/// An empty password field leaves the stored hash untouched; the record is
/// never re-hashed on a plain re-save.
#[tracing::instrument(name = "EditProfile", skip(user_store, hasher, jar, form))]
pub async fn edit_user<U, H>(
    State((user_store, hasher)): State<(U, H)>,
    Extension(claims): Extension<SessionClaims>,
    jar: CookieJar,
    Form(form): Form<EditForm>,
) -> Result<(CookieJar, Redirect), EditError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let email = Email::try_from(Secret::new(claims.sub.clone()))
        .map_err(|e| EditError::Identity(e.to_string()))?;

    let new_password = match form.password {
        Some(password) if !password.expose_secret().is_empty() => {
            match Password::try_from(password) {
                Ok(password) => Some(password),
                Err(_) => {
                    return Ok((set_flash(jar, Flash::PasswordTooShort), Redirect::to(EDIT_PATH)));
                }
            }
        }
        _ => None,
    };

    UpdateProfileUseCase::new(&user_store, &hasher)
        .execute(&email, new_password)
        .await?;

    Ok((jar, Redirect::to(USERS_PATH)))
}

#[derive(Debug, Error)]
pub enum EditError {
    #[error("Invalid identity in session token: {0}")]
    Identity(String),
    #[error("Failed to update user: {0}")]
    Update(#[from] UpdateProfileError),
}

impl IntoResponse for EditError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("{self}");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
