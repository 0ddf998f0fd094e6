pub mod config;
pub mod doc;
pub mod dtos;
pub mod routes;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

use axum::{Router, routing::get};
use routes::{health, remarks, reservation, root};
use state::AppState;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::doc::ApiDoc;

/// Builds the HTTP application over the given stores
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .route(
            "/api/reservations",
            get(reservation::get_reservations).post(reservation::create_reservation),
        )
        .route(
            "/api/reservations/{id}",
            get(reservation::get_reservation_by_id)
                .put(reservation::update_reservation)
                .delete(reservation::delete_reservation),
        )
        .route(
            "/api/reservations/{id}/remarks",
            get(remarks::get_reservation_remarks),
        )
        .route("/api/remarks/{id}", get(remarks::get_remark_by_id))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state)
}
