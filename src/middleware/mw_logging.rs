//! Request/response logging middleware.
//!
//! Logs every request with method, path, status, and latency through
//! `tracing`. Outermost layer of the stack, so panic-recovered 500s are
//! logged like any other response.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{error, info, warn};

pub async fn log_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_millis();

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms,
            "request failed"
        );
    } else if status.is_client_error() {
        warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms,
            "request rejected"
        );
    } else {
        info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms,
            "request handled"
        );
    }

    response
}
