use crate::{dtos::remarks::RemarksDtoGet, routes::internal_error, state::AppState};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use log::debug;

/// Get a specific remark by ID
#[utoipa::path(
    get,
    path = "/api/remarks/{id}",
    params(
        ("id" = i64, Path, description = "Remark ID")
    ),
    responses(
        (status = 200, description = "Remark found", body = RemarksDtoGet),
        (status = 404, description = "Remark not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Remarks"
)]
pub async fn get_remark_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RemarksDtoGet>, StatusCode> {
    let remark = state
        .remarks
        .find_by_id(id)
        .await
        .map_err(internal_error)?
        .ok_or_else(|| {
            debug!("Remark {id} not found");
            StatusCode::NOT_FOUND
        })?;

    Ok(Json(RemarksDtoGet::from_remarks(&remark)))
}

/// Get the remarks left on a reservation
#[utoipa::path(
    get,
    path = "/api/reservations/{id}/remarks",
    params(
        ("id" = i64, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Remarks for the reservation", body = Vec<RemarksDtoGet>),
        (status = 404, description = "Reservation not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Remarks"
)]
pub async fn get_reservation_remarks(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<RemarksDtoGet>>, StatusCode> {
    if !state
        .reservations
        .exists(id)
        .await
        .map_err(internal_error)?
    {
        debug!("Reservation {id} not found");
        return Err(StatusCode::NOT_FOUND);
    }

    let remarks = state
        .remarks
        .list_for_reservation(id)
        .await
        .map_err(internal_error)?;

    Ok(Json(remarks.into_iter().map(RemarksDtoGet::from).collect()))
}
