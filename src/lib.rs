pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod server;

pub use config::Config;
pub use database::DbPool;
pub use error::{AppError, Result};
pub use server::App;
