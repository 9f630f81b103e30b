//! Registration routes: the form and the submission handler.

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
use userhub_application::{RegisterError, RegisterUseCase};
use userhub_core::{Email, Password, PasswordHasher, PasswordHasherError, UserStore, UserStoreError};

use crate::{
    flash::{Flash, set_flash, take_flash},
    pages,
    routes::{ADD_PATH, USERS_PATH},
};

pub async fn add_form(jar: CookieJar) -> (CookieJar, Html<String>) {
    let (jar, flash) = take_flash(jar);
    (jar, pages::add_user_page(flash))
}

#[derive(Debug, Deserialize)]
pub struct AddUserForm {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

/// Create a user from the registration form.
///
/// Validation failures re-display the form with a flash message and leave
/// the store untouched; success redirects to the user listing.
#[tracing::instrument(name = "AddUser", skip(user_store, hasher, jar, form))]
pub async fn add_user<U, H>(
    State((user_store, hasher)): State<(U, H)>,
    jar: CookieJar,
    Form(form): Form<AddUserForm>,
) -> Result<(CookieJar, Redirect), AddUserError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let email = match Email::try_from(form.email) {
        Ok(email) => email,
        Err(_) => return Ok(redisplay(jar, Flash::InvalidEmail)),
    };
    let password = match Password::try_from(form.password) {
        Ok(password) => password,
        Err(_) => return Ok(redisplay(jar, Flash::PasswordTooShort)),
    };

    match RegisterUseCase::new(&user_store, &hasher)
        .execute(email, password)
        .await
    {
        Ok(_) => Ok((jar, Redirect::to(USERS_PATH))),
        Err(RegisterError::UserStoreError(UserStoreError::EmailAlreadyUsed)) => {
            Ok(redisplay(jar, Flash::EmailTaken))
        }
        Err(e) => Err(e.into()),
    }
}

fn redisplay(jar: CookieJar, flash: Flash) -> (CookieJar, Redirect) {
    (set_flash(jar, flash), Redirect::to(ADD_PATH))
}

#[derive(Debug, Error)]
pub enum AddUserError {
    #[error("Failed to create user: {0}")]
    Store(UserStoreError),
    #[error("Failed to hash password: {0}")]
    Hasher(PasswordHasherError),
}

impl From<RegisterError> for AddUserError {
    fn from(e: RegisterError) -> Self {
        match e {
            RegisterError::UserStoreError(e) => Self::Store(e),
            RegisterError::HasherError(e) => Self::Hasher(e),
        }
    }
}

impl IntoResponse for AddUserError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!("{self}");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
