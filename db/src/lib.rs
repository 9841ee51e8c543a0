pub mod error;
pub mod models;
pub mod test_utils;

pub use error::DomainError;

use common::config::AppConfig;
use sea_orm::{Database, DatabaseConnection};
use std::path::Path;

/// Opens the application database configured by `DATABASE_PATH`.
///
/// Accepts either a full DSN or a bare SQLite file path; in the latter case
/// the parent directory is created first (SQLite won't create intermediate
/// dirs).
pub async fn connect() -> DatabaseConnection {
    let path_or_url = AppConfig::get().database_path.clone();
    let url = if path_or_url.starts_with("sqlite:")
        || path_or_url.starts_with("postgres://")
        || path_or_url.starts_with("mysql://")
    {
        path_or_url
    } else {
        if let Some(parent) = Path::new(&path_or_url).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        format!("sqlite://{path_or_url}?mode=rwc")
    };

    Database::connect(&url)
        .await
        .expect("Failed to connect to database")
}
