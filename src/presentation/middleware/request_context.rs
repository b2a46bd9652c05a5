use axum::http::HeaderMap;
use serde::Serialize;
use std::net::SocketAddr;

/// Fallback value when no client information can be derived.
const UNKNOWN: &str = "unknown";

/// Derive the client IP for a request.
///
/// Precedence: first comma-separated entry of `X-Forwarded-For` (trimmed),
/// then `X-Real-IP`, then the transport-layer peer address, then `"unknown"`.
///
/// Proxy headers are trusted over the transport address. That is only safe
/// when the service sits behind a reverse proxy that strips or overwrites
/// these headers for untrusted clients; a directly exposed deployment lets
/// clients spoof their address here.
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    // Empty or whitespace-only header values count as absent and fall
    // through to the next tier
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first) = forwarded.split(',').map(str::trim).find(|part| !part.is_empty()) {
            return first.to_string();
        }
    }

    if let Some(real_ip) = headers.get("x-real-ip").and_then(|v| v.to_str().ok()) {
        let real_ip = real_ip.trim();
        if !real_ip.is_empty() {
            return real_ip.to_string();
        }
    }

    peer.map_or_else(|| UNKNOWN.to_string(), |addr| addr.ip().to_string())
}

/// The `User-Agent` header verbatim, or `"unknown"` if absent.
pub fn user_agent(headers: &HeaderMap) -> String {
    headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| UNKNOWN.to_string(), ToString::to_string)
}

/// Structured record of one security-relevant event.
///
/// Built on demand and handed to whatever caller logs or stores it;
/// nothing in this module performs I/O or persists entries.
#[derive(Debug, Clone, Serialize)]
pub struct AuditLogEntry {
    pub user_id: Option<i64>,
    pub event_type: Option<String>,
    pub event_details: serde_json::Map<String, serde_json::Value>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub success: bool,
    /// Seconds since the Unix epoch, captured at construction.
    pub timestamp: f64,
}

impl Default for AuditLogEntry {
    fn default() -> Self {
        Self {
            user_id: None,
            event_type: None,
            event_details: serde_json::Map::new(),
            ip_address: None,
            user_agent: None,
            success: true,
            timestamp: epoch_seconds(),
        }
    }
}

impl AuditLogEntry {
    /// New entry for the given event type; succeeds by default.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self { event_type: Some(event_type.into()), ..Self::default() }
    }

    pub fn with_user(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_details(mut self, details: serde_json::Map<String, serde_json::Value>) -> Self {
        self.event_details = details;
        self
    }

    pub fn with_ip(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = Some(ip_address.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn failed(mut self) -> Self {
        self.success = false;
        self
    }
}

fn epoch_seconds() -> f64 {
    let now = chrono::Utc::now();
    now.timestamp() as f64 + f64::from(now.timestamp_subsec_micros()) / 1_000_000.0
}
