//! HTTP handlers. The skeleton exposes exactly one route.

/// Liveness probe: always 200 `pong`, regardless of request content.
pub async fn ping() -> &'static str {
    "pong"
}
