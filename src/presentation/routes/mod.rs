use axum::{routing::get, Router};

use crate::presentation::handlers;

/// Application routes: status stubs nested under their module prefixes.
pub fn create_routes() -> Router {
    Router::new().nest("/auth", auth_routes()).nest("/users", users_routes())
}

fn auth_routes() -> Router {
    Router::new().route("/status", get(handlers::auth::auth_status))
}

fn users_routes() -> Router {
    Router::new().route("/status", get(handlers::users::users_status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn auth_status_route() {
        let (status, payload) = get_json(create_routes(), "/auth/status").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["module"], "authentication");
        assert_eq!(payload["status"], "placeholder");
    }

    #[tokio::test]
    async fn users_status_route() {
        let (status, payload) = get_json(create_routes(), "/users/status").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["module"], "user_management");
        assert_eq!(payload["status"], "placeholder");
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let request = Request::builder().uri("/auth/login").body(Body::empty()).unwrap();
        let response = create_routes().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
