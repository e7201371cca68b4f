//! Thin entry point: load environment, init logging, run the app.

use axum_pg_starter::App;
use tracing_subscriber::EnvFilter;

const BIND_ADDRESS: &str = "127.0.0.1:9000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env, if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let app = App::new().await?;
    app.run(BIND_ADDRESS).await?;

    Ok(())
}
