use crate::{dtos::reservation::ReservationDto, routes::internal_error, state::AppState};
use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use database::services::{StoreError, UpdateOutcome};
use log::{debug, error, info};

/// Get every reservation, oldest first
///
/// No date filtering is applied; all stored reservations are returned.
#[utoipa::path(
    get,
    path = "/api/reservations",
    responses(
        (status = 200, description = "List of reservations", body = Vec<ReservationDto>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reservations"
)]
pub async fn get_reservations(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReservationDto>>, StatusCode> {
    let reservations = state
        .reservations
        .list_all()
        .await
        .map_err(internal_error)?;

    Ok(Json(
        reservations.into_iter().map(ReservationDto::from).collect(),
    ))
}

/// Get a specific reservation by ID
#[utoipa::path(
    get,
    path = "/api/reservations/{id}",
    params(
        ("id" = i64, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation found", body = ReservationDto),
        (status = 404, description = "Reservation not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reservations"
)]
pub async fn get_reservation_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ReservationDto>, StatusCode> {
    match state
        .reservations
        .find_by_id(id)
        .await
        .map_err(internal_error)?
    {
        Some(reservation) => Ok(Json(reservation.into())),
        None => {
            debug!("Reservation {id} not found");
            Err(StatusCode::NOT_FOUND)
        }
    }
}

/// Replace a reservation
///
/// The body must carry the same `id` as the path and replaces every field.
#[utoipa::path(
    put,
    path = "/api/reservations/{id}",
    params(
        ("id" = i64, Path, description = "Reservation ID")
    ),
    request_body = ReservationDto,
    responses(
        (status = 204, description = "Reservation replaced"),
        (status = 400, description = "Body id does not match path id"),
        (status = 404, description = "Reservation not found"),
        (status = 500, description = "Unresolved concurrent modification or internal error")
    ),
    tag = "Reservations"
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<ReservationDto>,
) -> Result<StatusCode, StatusCode> {
    if body.id != id {
        debug!("Rejected update: path id {id} but body id {}", body.id);
        return Err(StatusCode::BAD_REQUEST);
    }

    let outcome = state
        .reservations
        .update_full(body.into())
        .await
        .map_err(internal_error)?;

    match outcome {
        UpdateOutcome::Updated => Ok(StatusCode::NO_CONTENT),
        UpdateOutcome::Conflict => {
            let exists = state
                .reservations
                .exists(id)
                .await
                .map_err(internal_error)?;

            if !exists {
                debug!("Reservation {id} not found");
                return Err(StatusCode::NOT_FOUND);
            }

            error!("Concurrent modification of reservation {id} could not be resolved");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Create a reservation
///
/// Any `id` in the body is ignored; the stored reservation is returned with its
/// assigned id and a `Location` header pointing at it.
#[utoipa::path(
    post,
    path = "/api/reservations",
    request_body = ReservationDto,
    responses(
        (status = 201, description = "Reservation created", body = ReservationDto),
        (status = 400, description = "Malformed reservation"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reservations"
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(body): Json<ReservationDto>,
) -> Result<impl IntoResponse, StatusCode> {
    let created = state
        .reservations
        .insert(body.into())
        .await
        .map_err(internal_error)?;

    info!("Created reservation {}", created.id);
    let location = format!("/api/reservations/{}", created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ReservationDto::from(created)),
    ))
}

/// Delete a reservation, returning its last stored values
#[utoipa::path(
    delete,
    path = "/api/reservations/{id}",
    params(
        ("id" = i64, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation deleted", body = ReservationDto),
        (status = 404, description = "Reservation not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Reservations"
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ReservationDto>, StatusCode> {
    match state.reservations.remove(id).await {
        Ok(removed) => {
            info!("Deleted reservation {id}");
            Ok(Json(removed.into()))
        }
        Err(StoreError::NotFound(_)) => {
            debug!("Reservation {id} not found");
            Err(StatusCode::NOT_FOUND)
        }
        Err(e) => Err(internal_error(e)),
    }
}
