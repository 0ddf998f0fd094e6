use crate::entities::remarks;
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

/// Read-only access to remarks; they are never written through the API
#[async_trait]
pub trait RemarksStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<remarks::Model>, DbErr>;

    /// Remarks attached to one reservation, oldest first
    async fn list_for_reservation(
        &self,
        reservation_id: i64,
    ) -> Result<Vec<remarks::Model>, DbErr>;
}

#[derive(Clone)]
pub struct RemarksService {
    db: DatabaseConnection,
}

impl RemarksService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RemarksStore for RemarksService {
    async fn find_by_id(&self, id: i64) -> Result<Option<remarks::Model>, DbErr> {
        remarks::Entity::find_by_id(id).one(&self.db).await
    }

    async fn list_for_reservation(
        &self,
        reservation_id: i64,
    ) -> Result<Vec<remarks::Model>, DbErr> {
        remarks::Entity::find()
            .filter(remarks::Column::ReservationId.eq(reservation_id))
            .order_by_asc(remarks::Column::Id)
            .all(&self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::test_connection,
        entities::reservation,
        services::reservation::{ReservationService, ReservationStore},
    };
    use chrono::Utc;
    use models::Importance;
    use sea_orm::{ActiveModelTrait, ActiveValue::Set};

    async fn insert_reservation(db: &DatabaseConnection) -> i64 {
        let now = Utc::now();
        let created = ReservationService::new(db.clone())
            .insert(reservation::Model {
                id: 0,
                sum: 10.0,
                location: "Sibiu".to_string(),
                added_on: now,
                currency: "lei".to_string(),
                reservation_type: "stay".to_string(),
                departure_time: now,
                arrival_time: now,
                documents: false,
            })
            .await
            .unwrap();
        created.id
    }

    async fn insert_remark(
        db: &DatabaseConnection,
        reservation_id: i64,
        importance: Importance,
    ) -> remarks::Model {
        remarks::ActiveModel {
            agent: Set("front desk".to_string()),
            content: Set("late check-in".to_string()),
            importance: Set(importance),
            reservation_id: Set(reservation_id),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let db = test_connection().await;
        let reservation_id = insert_reservation(&db).await;
        let remark = insert_remark(&db, reservation_id, Importance::High).await;
        let store = RemarksService::new(db);

        assert_eq!(store.find_by_id(remark.id).await.unwrap(), Some(remark.clone()));
        assert_eq!(store.find_by_id(remark.id + 1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_for_reservation_only_returns_its_remarks() {
        let db = test_connection().await;
        let first = insert_reservation(&db).await;
        let second = insert_reservation(&db).await;

        let a = insert_remark(&db, first, Importance::Low).await;
        insert_remark(&db, second, Importance::Medium).await;
        let c = insert_remark(&db, first, Importance::Critical).await;

        let store = RemarksService::new(db);
        assert_eq!(store.list_for_reservation(first).await.unwrap(), vec![a, c]);
        assert!(store.list_for_reservation(first + 100).await.unwrap().is_empty());
    }
}
