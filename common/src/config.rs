//! Global application configuration.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables. It is
//! populated exactly once at startup and immutable afterwards.

use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::env;

/// Complete application configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_duration_minutes: u64,
}

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

impl AppConfig {
    /// Loads the configuration from a specific env file and the process
    /// environment, and installs it as the global instance.
    ///
    /// Panics if `JWT_SECRET` or `DATABASE_PATH` is missing: the service
    /// must not come up without them.
    pub fn init(env_path: &str) -> &'static Self {
        dotenvy::from_filename(env_path).ok();
        CONFIG.get_or_init(AppConfig::from_env)
    }

    /// Returns the global configuration, loading `.env` on first access.
    pub fn get() -> &'static Self {
        CONFIG.get_or_init(|| {
            dotenvy::dotenv().ok();
            AppConfig::from_env()
        })
    }

    fn from_env() -> Self {
        Self {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "college-api".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "api=info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "api.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
            database_path: env::var("DATABASE_PATH").expect("DATABASE_PATH is required"),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET is required"),
            jwt_duration_minutes: env::var("JWT_DURATION_MINUTES")
                .ok()
                .and_then(|m| m.parse().ok())
                .unwrap_or(60),
        }
    }
}
