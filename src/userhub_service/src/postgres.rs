use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};
use userhub_adapters::config::settings::PostgresSettings;

/// Create the connection pool and bring the schema up to date.
pub async fn configure_postgresql(settings: &PostgresSettings) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(settings.url.expose_secret())
        .await?;

    sqlx::migrate!().run(&pool).await?;

    Ok(pool)
}
