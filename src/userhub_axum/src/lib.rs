//! Axum HTTP layer for the userhub user-management service.
//!
//! Route handlers translate form submissions into use case calls and use
//! case results back into redirects, flash messages and the auth cookie.
//! Everything below this crate is framework-free.

pub mod flash;
pub mod guard;
pub mod pages;
pub mod routes;

pub use flash::Flash;
pub use guard::require_login;
pub use routes::RouterConfig;
