//! Application shell: startup sequencing and the HTTP router.
//!
//! Startup is strictly linear — resolve configuration, open the database
//! pool, build the router — and every step returns `Result`; the binary
//! decides to abort. Serving then blocks until the process dies.

use axum::{extract::FromRef, middleware::from_fn, middleware::from_fn_with_state, routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tracing::info;

use crate::config::Config;
use crate::database::{create_pool, DbPool};
use crate::error::Result;
use crate::handlers;
use crate::middleware::{log_requests, secure_headers, SecurityConfig};

/// State shared with every handler for the process lifetime.
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub config: Config,
}

impl FromRef<AppState> for DbPool {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

/// The application context: one owner for the pool and the router.
pub struct App {
    state: AppState,
    router: Router,
}

impl App {
    /// Resolve configuration, open the database pool, and build the router.
    /// Any failure aborts construction; there is no partial startup.
    pub async fn new() -> Result<Self> {
        info!("Initializing application context");

        let config = Config::from_env()?;
        let db = create_pool(&config.db).await?;

        let state = AppState { db, config };
        let router = create_router(state.clone(), SecurityConfig::default());

        Ok(Self { state, router })
    }

    pub fn db(&self) -> &DbPool {
        &self.state.db
    }

    /// Bind `addr` (a `host:port` string) and serve until a fatal error.
    pub async fn run(self, addr: &str) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("Listening on http://{addr}");
        axum::serve(listener, self.router).await?;
        Ok(())
    }
}

/// Build the router: one route, three layers.
///
/// Layer nesting, outermost first: request logging, security headers, panic
/// recovery. Recovery sits inside the security layer so a panic-produced
/// 500 still carries the security headers.
pub fn create_router(state: AppState, security: SecurityConfig) -> Router {
    Router::new()
        .route("/ping", get(handlers::ping))
        .with_state(state)
        .layer(CatchPanicLayer::new())
        .layer(from_fn_with_state(security, secure_headers))
        .layer(from_fn(log_requests))
}
