use axum::http::StatusCode;

/// Identifies the service and its version
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", content_type = "text/plain", body = String)
    ),
    tag = "Health"
)]
pub async fn root() -> (StatusCode, String) {
    (
        StatusCode::OK,
        format!("Reservations API v{}", env!("CARGO_PKG_VERSION")),
    )
}
