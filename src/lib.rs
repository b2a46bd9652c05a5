#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(warnings)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_errors_doc)]
// Route handlers are async by contract even when they never await
#![allow(clippy::unused_async)]

//! Authentication Service
//!
//! Scaffold of an authentication and user-management HTTP API: validated
//! environment configuration, a security-header/request-tracking middleware
//! pipeline with CORS and trusted-host gating, and placeholder routers for
//! the upcoming authentication and user-management endpoints.

pub mod infrastructure;
pub mod presentation;

pub use infrastructure::config::{ConfigError, Settings};
pub use presentation::middleware::{client_ip, user_agent, AuditLogEntry, RequestTrack};
