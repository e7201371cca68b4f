use thiserror::Error;

use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, AppError>;

/// Startup failures. All of them are fatal: the binary logs the error and
/// exits non-zero. Request-level failures never reach this type — handler
/// panics are contained by the recovery layer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}
