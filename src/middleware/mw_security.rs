//! Security headers and host allow-list middleware.

use axum::{
    extract::{Request, State},
    http::{
        header::{
            HeaderValue, CONTENT_SECURITY_POLICY, HOST, STRICT_TRANSPORT_SECURITY,
            X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS, X_XSS_PROTECTION,
        },
        HeaderName, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

const X_DOWNLOAD_OPTIONS: HeaderName = HeaderName::from_static("x-download-options");

/// ~10 years, subdomains included.
const HSTS_VALUE: &str = "max-age=315360000; includeSubDomains";

/// Security middleware configuration.
///
/// In development mode the host allow-list is not enforced and the HSTS
/// header is omitted (the service runs over plain HTTP); the remaining
/// headers are always set.
#[derive(Clone, Debug)]
pub struct SecurityConfig {
    pub allowed_hosts: Vec<String>,
    pub is_development: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            allowed_hosts: vec!["localhost".to_string(), "localhost:9000".to_string()],
            is_development: true,
        }
    }
}

impl SecurityConfig {
    fn host_allowed(&self, host: Option<&str>) -> bool {
        if self.allowed_hosts.is_empty() {
            return true;
        }
        match host {
            Some(host) => self.allowed_hosts.iter().any(|allowed| allowed == host),
            None => false,
        }
    }
}

/// Enforce the host allow-list and stamp security headers on the response.
pub async fn secure_headers(
    State(config): State<SecurityConfig>,
    req: Request,
    next: Next,
) -> Response {
    if !config.is_development {
        let host = req.headers().get(HOST).and_then(|v| v.to_str().ok());
        if !config.host_allowed(host) {
            warn!(host = ?host, "rejected request for non-allow-listed host");
            let mut response = (StatusCode::FORBIDDEN, "bad host").into_response();
            apply_headers(&mut response, &config);
            return response;
        }
    }

    let mut response = next.run(req).await;
    apply_headers(&mut response, &config);
    response
}

fn apply_headers(response: &mut Response, config: &SecurityConfig) {
    let headers = response.headers_mut();

    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(X_XSS_PROTECTION, HeaderValue::from_static("1; mode=block"));
    headers.insert(
        CONTENT_SECURITY_POLICY,
        HeaderValue::from_static("default-src 'self'"),
    );
    headers.insert(X_DOWNLOAD_OPTIONS, HeaderValue::from_static("noopen"));

    if !config.is_development {
        headers.insert(
            STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static(HSTS_VALUE),
        );
    }
}
