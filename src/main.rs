//! Entry point: load config, wire dependencies, and run the server.

use accounts::auth::JwtSecret;
use accounts::config::Config;
use accounts::db::{self, PgUserStore};
use accounts::{create_app, AppState};
use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("config: {}", e))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db_pool = db::create_pool(&config.database_url)
        .await
        .context("connect to database")?;
    db::run_migrations(&db_pool)
        .await
        .context("run migrations")?;

    let jwt_secret = JwtSecret::new(
        config.jwt_secret.clone(),
        chrono::Duration::hours(config.token_ttl_hours),
    );
    let state = AppState::new(Arc::new(PgUserStore::new(db_pool)), jwt_secret);

    let app = create_app(state);

    tracing::info!(addr = %config.server_addr, "listening");
    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
