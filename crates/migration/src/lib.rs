pub use sea_orm_migration::prelude::*;

mod m20250801_create_remarks_table;
mod m20250801_create_reservations_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_create_reservations_table::Migration),
            Box::new(m20250801_create_remarks_table::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::{ConnectOptions, Database};

    #[tokio::test]
    async fn test_up_down_round_trip() {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).min_connections(1);
        let db = Database::connect(options).await.unwrap();

        Migrator::up(&db, None).await.unwrap();
        let manager = SchemaManager::new(&db);
        assert!(manager.has_table("reservations").await.unwrap());
        assert!(manager.has_table("remarks").await.unwrap());

        Migrator::down(&db, None).await.unwrap();
        assert!(!manager.has_table("remarks").await.unwrap());
        assert!(!manager.has_table("reservations").await.unwrap());
    }
}
