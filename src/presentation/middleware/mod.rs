//! Middleware for the request-processing pipeline:
//! - Security headers and request tracking
//! - Trusted-host gating
//! - Request-context utilities (client IP, user agent, audit entries)

pub mod request_context;
pub mod security;
pub mod trusted_host;

pub use request_context::{client_ip, user_agent, AuditLogEntry};
pub use security::{track_and_secure, RequestTrack};
pub use trusted_host::enforce_trusted_hosts;
