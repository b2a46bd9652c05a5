use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use std::time::Instant;
use uuid::Uuid;

/// Per-request tracking state, owned by the single in-flight request.
///
/// Stored in request extensions so downstream handlers (logging, audit)
/// can pick up the request id; destroyed when the request completes.
#[derive(Debug, Clone)]
pub struct RequestTrack {
    pub request_id: String,
    pub started_at: Instant,
}

/// Security-headers and request-tracking middleware.
///
/// Generates a fresh UUID v4 request id, attaches it to the request's
/// extensions, times the downstream handler chain, and unconditionally sets
/// the defensive header set on the response, overwriting any pre-existing
/// values. Headers are applied for every status class; the middleware is not
/// a recovery boundary and lets downstream failures propagate untouched.
pub async fn track_and_secure(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let started_at = Instant::now();
    request.extensions_mut().insert(RequestTrack { request_id: request_id.clone(), started_at });

    let mut response = next.run(request).await;

    let process_time = started_at.elapsed().as_secs_f64();
    let headers = response.headers_mut();

    headers.insert("X-Content-Type-Options", HeaderValue::from_static("nosniff"));
    headers.insert("X-Frame-Options", HeaderValue::from_static("DENY"));
    headers.insert("X-XSS-Protection", HeaderValue::from_static("1; mode=block"));
    headers.insert("Referrer-Policy", HeaderValue::from_static("strict-origin-when-cross-origin"));
    headers.insert(
        "Permissions-Policy",
        HeaderValue::from_static("geolocation=(), microphone=(), camera=()"),
    );
    headers.insert(
        "Strict-Transport-Security",
        HeaderValue::from_static("max-age=31536000; includeSubDomains"),
    );

    headers.insert(
        "X-Request-ID",
        HeaderValue::from_str(&request_id).unwrap_or_else(|_| HeaderValue::from_static("invalid")),
    );
    headers.insert(
        "X-Process-Time",
        HeaderValue::from_str(&process_time.to_string())
            .unwrap_or_else(|_| HeaderValue::from_static("0")),
    );

    response
}
