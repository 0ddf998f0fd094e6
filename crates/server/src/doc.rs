use crate::{
    dtos::{remarks::RemarksDtoGet, reservation::ReservationDto},
    routes::{health, remarks, reservation, root},
};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        reservation::get_reservations,
        reservation::get_reservation_by_id,
        reservation::update_reservation,
        reservation::create_reservation,
        reservation::delete_reservation,
        remarks::get_remark_by_id,
        remarks::get_reservation_remarks
    ),
    components(schemas(ReservationDto, RemarksDtoGet)),
    tags(
        (name = "Health", description = "Service status endpoints"),
        (name = "Reservations", description = "Reservation CRUD endpoints"),
        (name = "Remarks", description = "Read-only remark endpoints"),
    ),
    info(
        title = "Reservations API",
        version = "1.0.0",
        description = "Travel reservations and their remarks",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();

        for expected in [
            "/",
            "/health",
            "/api/reservations",
            "/api/reservations/{id}",
            "/api/reservations/{id}/remarks",
            "/api/remarks/{id}",
        ] {
            assert!(paths.iter().any(|p| p == expected), "missing {expected}");
        }
    }
}
