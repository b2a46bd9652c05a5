use axum::response::Json;
use serde_json::{json, Value};

/// Authentication module status.
///
/// Placeholder until the core authentication endpoints (login, logout,
/// token refresh) are implemented.
pub async fn auth_status() -> Json<Value> {
    Json(json!({
        "module": "authentication",
        "status": "placeholder"
    }))
}
