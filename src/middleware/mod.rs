//! Axum middleware for request logging and security headers.
//!
//! Panic recovery is the third layer of the stack but needs no code here:
//! the router uses `tower_http::catch_panic::CatchPanicLayer` directly.

pub mod mw_logging;
pub mod mw_security;

pub use mw_logging::log_requests;
pub use mw_security::{secure_headers, SecurityConfig};
