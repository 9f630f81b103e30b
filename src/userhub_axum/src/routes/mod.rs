pub mod add;
pub mod dashboard;
pub mod edit;
pub mod index;
pub mod login;
pub mod logout;

use userhub_adapters::SessionTokenConfig;

pub const USERS_PATH: &str = "/users";
pub const ADD_PATH: &str = "/users/add";
pub const LOGIN_PATH: &str = "/users/login";
pub const LOGOUT_PATH: &str = "/users/logout";
pub const EDIT_PATH: &str = "/users/edit";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// State shared by the route handlers and the login guard.
#[derive(Clone)]
pub struct RouterConfig {
    pub tokens: SessionTokenConfig,
    /// Where a successful login lands.
    pub login_redirect: String,
}
