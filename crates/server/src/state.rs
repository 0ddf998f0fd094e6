use std::sync::Arc;

use database::services::{RemarksService, RemarksStore, ReservationService, ReservationStore};
use sea_orm::DatabaseConnection;

/// Stores shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub reservations: Arc<dyn ReservationStore>,
    pub remarks: Arc<dyn RemarksStore>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            reservations: Arc::new(ReservationService::new(db.clone())),
            remarks: Arc::new(RemarksService::new(db)),
        }
    }
}
