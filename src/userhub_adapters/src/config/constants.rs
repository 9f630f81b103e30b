pub mod env {
    /// Prefix for all environment overrides, e.g. `USERHUB__POSTGRES__URL`.
    pub const ENV_PREFIX: &str = "USERHUB";
    pub const DATABASE_URL_ENV_VAR: &str = "USERHUB__POSTGRES__URL";
    pub const JWT_SECRET_ENV_VAR: &str = "USERHUB__AUTH__JWT_SECRET";
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
