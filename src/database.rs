//! Postgres pool construction.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::{ConnectOptions, PgPool};
use tracing::info;

use crate::config::DbConfig;

pub type DbPool = PgPool;

/// Statements slower than this are logged at warn level.
const SLOW_STATEMENT_THRESHOLD: Duration = Duration::from_secs(1);

/// Connect options for the configured database. TLS is disabled; this
/// skeleton targets a local or host-trusted Postgres.
pub fn connect_options(config: &DbConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name)
        .ssl_mode(PgSslMode::Disable)
        .log_statements(log::LevelFilter::Info)
        .log_slow_statements(log::LevelFilter::Warn, SLOW_STATEMENT_THRESHOLD)
}

/// Open a connection pool eagerly. A connection failure here is fatal to
/// startup; the caller decides to abort.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    info!("Connecting to database at {}:{}", config.host, config.port);

    let pool = PgPoolOptions::new()
        .connect_with(connect_options(config))
        .await?;

    info!("Database pool ready");
    Ok(pool)
}
