use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use userhub_adapters::{
    BcryptHasher, PostgresSessionStore, PostgresUserStore, SessionTokenConfig, config::Settings,
};
use userhub_axum::RouterConfig;
use userhub_service::{UsersService, configure_postgresql};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialize tracing");

    // Load configuration
    let settings = Settings::load()?;

    // Setup database connection pool and run migrations
    let pool = configure_postgresql(&settings.postgres).await?;

    // Create stores
    let user_store = PostgresUserStore::new(pool.clone());
    let session_store = PostgresSessionStore::new(pool);
    let hasher = BcryptHasher::new(settings.auth.bcrypt_cost);

    let config = RouterConfig {
        tokens: SessionTokenConfig {
            cookie_name: settings.auth.cookie_name.clone(),
            secret: settings.auth.jwt_secret.clone(),
            token_ttl_in_seconds: settings.auth.token_ttl_seconds,
        },
        login_redirect: settings.app.login_redirect.clone(),
    };

    let service = UsersService::new(user_store, session_store, hasher, config);

    let listener = tokio::net::TcpListener::bind(&settings.app.address).await?;
    tracing::info!("Starting userhub...");

    service.run_standalone(listener).await?;

    Ok(())
}

fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
