use crate::entities::reservation;
use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("reservation {0} not found")]
    NotFound(i64),
    #[error(transparent)]
    Db(#[from] DbErr),
}

/// Result of a full overwrite of a reservation row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    /// No row matched the reservation's id when the write was applied
    Conflict,
}

/// Persistence operations the reservation handlers rely on
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// All reservations in insertion order
    async fn list_all(&self) -> Result<Vec<reservation::Model>, DbErr>;

    async fn find_by_id(&self, id: i64) -> Result<Option<reservation::Model>, DbErr>;

    /// Inserts a new row, ignoring the id on `reservation`, and returns it with the assigned id
    async fn insert(&self, reservation: reservation::Model) -> Result<reservation::Model, DbErr>;

    /// Overwrites every column of the row identified by `reservation.id`
    async fn update_full(&self, reservation: reservation::Model) -> Result<UpdateOutcome, DbErr>;

    /// Deletes the row and returns its last stored values
    async fn remove(&self, id: i64) -> Result<reservation::Model, StoreError>;

    async fn exists(&self, id: i64) -> Result<bool, DbErr>;

    /// Checks that the underlying database is reachable
    async fn ping(&self) -> Result<(), DbErr>;
}

#[derive(Clone)]
pub struct ReservationService {
    db: DatabaseConnection,
}

impl ReservationService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn to_active_model(reservation: reservation::Model) -> reservation::ActiveModel {
        reservation::ActiveModel {
            id: NotSet,
            sum: Set(reservation.sum),
            location: Set(reservation.location),
            added_on: Set(reservation.added_on),
            currency: Set(reservation.currency),
            reservation_type: Set(reservation.reservation_type),
            departure_time: Set(reservation.departure_time),
            arrival_time: Set(reservation.arrival_time),
            documents: Set(reservation.documents),
        }
    }
}

#[async_trait]
impl ReservationStore for ReservationService {
    async fn list_all(&self) -> Result<Vec<reservation::Model>, DbErr> {
        reservation::Entity::find()
            .order_by_asc(reservation::Column::Id)
            .all(&self.db)
            .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<reservation::Model>, DbErr> {
        reservation::Entity::find_by_id(id).one(&self.db).await
    }

    async fn insert(&self, reservation: reservation::Model) -> Result<reservation::Model, DbErr> {
        let inserted = Self::to_active_model(reservation).insert(&self.db).await?;
        debug!("Inserted reservation {}", inserted.id);
        Ok(inserted)
    }

    async fn update_full(&self, reservation: reservation::Model) -> Result<UpdateOutcome, DbErr> {
        let id = reservation.id;

        let result = reservation::Entity::update_many()
            .set(Self::to_active_model(reservation))
            .filter(reservation::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            debug!("Update of reservation {id} matched no rows");
            return Ok(UpdateOutcome::Conflict);
        }

        Ok(UpdateOutcome::Updated)
    }

    async fn remove(&self, id: i64) -> Result<reservation::Model, StoreError> {
        let txn = self.db.begin().await?;

        let reservation = reservation::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(StoreError::NotFound(id))?;

        reservation::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        debug!("Removed reservation {id}");
        Ok(reservation)
    }

    async fn exists(&self, id: i64) -> Result<bool, DbErr> {
        let count = reservation::Entity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn ping(&self) -> Result<(), DbErr> {
        self.db.ping().await
    }
}
