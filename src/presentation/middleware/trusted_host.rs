use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::config::Settings;

/// Reject requests whose `Host` header is not on the allow-list.
///
/// A pattern of `*` matches any host; `*.example.com` matches any
/// subdomain (but not `example.com` itself). Ports are ignored when
/// matching. Applied only in non-debug mode by the app assembly.
pub async fn enforce_trusted_hosts(
    State(settings): State<Arc<Settings>>,
    request: Request,
    next: Next,
) -> Response {
    let host = request
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(strip_port)
        .unwrap_or_default();

    if !host_allowed(host, &settings.allowed_hosts) {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "Invalid host header"})))
            .into_response();
    }

    next.run(request).await
}

fn strip_port(host: &str) -> &str {
    host.split(':').next().unwrap_or(host)
}

fn host_allowed(host: &str, patterns: &[String]) -> bool {
    if host.is_empty() {
        return false;
    }
    patterns.iter().any(|pattern| {
        pattern == "*"
            || pattern == host
            || (pattern.starts_with('*') && host.ends_with(&pattern[1..]))
    })
}
