use config::{Config, ConfigError, Environment, File};
use secrecy::Secret;
use serde::Deserialize;

use super::constants;

/// Service configuration.
///
/// Values come from an optional `userhub.json` file with environment
/// overrides under the `USERHUB__` prefix (`USERHUB__POSTGRES__URL`,
/// `USERHUB__AUTH__JWT_SECRET`, ...). Secrets stay wrapped in `Secret`.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub postgres: PostgresSettings,
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    pub address: String,
    /// Where a successful login redirects to.
    pub login_redirect: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt_secret: Secret<String>,
    pub cookie_name: String,
    pub token_ttl_seconds: i64,
    pub bcrypt_cost: u32,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Config::builder()
            .set_default("app.address", constants::prod::APP_ADDRESS)?
            .set_default("app.login_redirect", "/dashboard")?
            .set_default("postgres.max_connections", 5)?
            .set_default("auth.cookie_name", "userhub_auth")?
            .set_default("auth.token_ttl_seconds", 3600)?
            .set_default("auth.bcrypt_cost", i64::from(bcrypt::DEFAULT_COST))?
            .add_source(File::with_name("userhub").required(false))
            .add_source(
                Environment::with_prefix(constants::env::ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}
