pub mod remarks;
pub mod reservation;

pub use remarks::{RemarksService, RemarksStore};
pub use reservation::{ReservationService, ReservationStore, StoreError, UpdateOutcome};
