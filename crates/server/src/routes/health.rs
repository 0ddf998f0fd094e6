use axum::{extract::State, http::StatusCode};
use log::warn;

use crate::state::AppState;

/// Reports whether the service can reach its database
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and database are healthy", content_type = "text/plain", body = String),
        (status = 503, description = "Database is unreachable", content_type = "text/plain", body = String)
    ),
    tag = "Health"
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match state.reservations.ping().await {
        Ok(()) => (StatusCode::OK, "OK"),
        Err(e) => {
            warn!("Health check failed: {e}");
            (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable")
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{send, test_app};
    use axum::{body::Body, http::Request, http::StatusCode};

    #[tokio::test]
    async fn test_health_and_root() {
        let app = test_app().await;

        for uri in ["/health", "/"] {
            let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
            assert_eq!(send(&app, request).await.status(), StatusCode::OK);
        }
    }
}
