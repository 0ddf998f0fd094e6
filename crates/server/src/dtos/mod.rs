pub mod remarks;
pub mod reservation;
