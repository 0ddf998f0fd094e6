pub mod remarks;
pub mod reservation;

pub mod prelude {
    pub use super::remarks::Entity as Remarks;
    pub use super::reservation::Entity as Reservation;
}
