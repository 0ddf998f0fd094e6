use axum::{Router, body::Body, http::Request, response::Response};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::Value;
use tower::ServiceExt;

use crate::state::AppState;

/// State backed by a migrated in-memory SQLite database
pub(crate) async fn test_state() -> (AppState, DatabaseConnection) {
    // Each SQLite memory connection is a separate database
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1);

    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    (AppState::new(db.clone()), db)
}

pub(crate) async fn test_app() -> Router {
    let (state, _) = test_state().await;
    crate::app(state)
}

pub(crate) async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub(crate) async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
