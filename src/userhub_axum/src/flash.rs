//! One-shot flash messages carried across a redirect in a cookie.
//!
//! The cookie stores a short code rather than the message text, so the
//! value stays within the characters a cookie may carry. The code is
//! resolved back into a user-facing message when the form is rendered.

use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use userhub_core::MIN_PASSWORD_LENGTH;

const FLASH_COOKIE: &str = "_flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    EmailTaken,
    PasswordTooShort,
    InvalidEmail,
    BadCredentials,
    Error,
}

impl Flash {
    fn code(self) -> &'static str {
        match self {
            Self::EmailTaken => "email_taken",
            Self::PasswordTooShort => "password_too_short",
            Self::InvalidEmail => "invalid_email",
            Self::BadCredentials => "bad_credentials",
            Self::Error => "error",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "email_taken" => Some(Self::EmailTaken),
            "password_too_short" => Some(Self::PasswordTooShort),
            "invalid_email" => Some(Self::InvalidEmail),
            "bad_credentials" => Some(Self::BadCredentials),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    pub fn message(self) -> String {
        match self {
            Self::EmailTaken => "This email address has already been used.".to_owned(),
            Self::PasswordTooShort => {
                format!("A password should be at least {MIN_PASSWORD_LENGTH} characters long.")
            }
            Self::InvalidEmail => "This is not a valid email address.".to_owned(),
            Self::BadCredentials => "Incorrect email or password.".to_owned(),
            Self::Error => "Something went wrong. Please try again.".to_owned(),
        }
    }
}

/// Queue a flash message for the next request.
pub fn set_flash(jar: CookieJar, flash: Flash) -> CookieJar {
    jar.add(
        Cookie::build((FLASH_COOKIE, flash.code()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build(),
    )
}

/// Read and clear the pending flash message, if any.
pub fn take_flash(jar: CookieJar) -> (CookieJar, Option<Flash>) {
    let flash = jar.get(FLASH_COOKIE).and_then(|c| Flash::from_code(c.value()));
    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
    (jar, flash)
}
