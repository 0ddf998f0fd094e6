use std::fmt::Display;

use axum::http::StatusCode;
use log::error;

pub mod health;
pub mod remarks;
pub mod reservation;
pub mod root;

/// Logs a store failure and maps it to a 500
pub(crate) fn internal_error(err: impl Display) -> StatusCode {
    error!("Store operation failed: {err}");
    StatusCode::INTERNAL_SERVER_ERROR
}
