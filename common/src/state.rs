//! Application state container shared across Axum route handlers.

use sea_orm::DatabaseConnection;

/// Central application state shared across the server.
///
/// Holds the SeaORM database connection; cloned into every handler via
/// Axum's `State<T>` extractor.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
}

impl AppState {
    /// Creates a new `AppState` wrapping the given database connection.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Returns a cloned copy of the database connection, for contexts that
    /// need ownership (spawned tasks, stored handles).
    pub fn db_clone(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
