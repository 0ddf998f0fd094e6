use std::time::Duration;

use log::info;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Upper bound on pooled connections to the store
const MAX_CONNECTIONS: u32 = 16;

/// Creates a pooled database connection for the given URL
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url);
    options
        .max_connections(MAX_CONNECTIONS)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    info!("Connected to database");
    Ok(db)
}

/// Opens a migrated in-memory SQLite database for tests
#[cfg(test)]
pub(crate) async fn test_connection() -> DatabaseConnection {
    use migration::{Migrator, MigratorTrait};

    // A single connection, since every SQLite memory connection is its own database
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1);

    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}
