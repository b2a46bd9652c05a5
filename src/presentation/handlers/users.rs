use axum::response::Json;
use serde_json::{json, Value};

/// User-management module status.
///
/// Placeholder until profile and account-management endpoints are
/// implemented.
pub async fn users_status() -> Json<Value> {
    Json(json!({
        "module": "user_management",
        "status": "placeholder"
    }))
}
