//! HTTP handlers. Both routers are status stubs for now; the real
//! endpoints arrive with the authentication and user-management work.

pub mod auth;
pub mod users;
