use chrono::{DateTime, Utc};
use database::entities::reservation;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire shape of a reservation, used for both requests and responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    /// Assigned by the server on creation; ignored in POST bodies
    #[serde(default)]
    pub id: i64,
    pub sum: f64,
    pub location: String,
    pub added_on: DateTime<Utc>,
    #[schema(example = "lei")]
    pub currency: String,
    #[serde(rename = "type")]
    #[schema(example = "stay")]
    pub reservation_type: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub documents: bool,
}

impl From<reservation::Model> for ReservationDto {
    fn from(model: reservation::Model) -> Self {
        Self {
            id: model.id,
            sum: model.sum,
            location: model.location,
            added_on: model.added_on,
            currency: model.currency,
            reservation_type: model.reservation_type,
            departure_time: model.departure_time,
            arrival_time: model.arrival_time,
            documents: model.documents,
        }
    }
}

impl From<ReservationDto> for reservation::Model {
    fn from(dto: ReservationDto) -> Self {
        Self {
            id: dto.id,
            sum: dto.sum,
            location: dto.location,
            added_on: dto.added_on,
            currency: dto.currency,
            reservation_type: dto.reservation_type,
            departure_time: dto.departure_time,
            arrival_time: dto.arrival_time,
            documents: dto.documents,
        }
    }
}
