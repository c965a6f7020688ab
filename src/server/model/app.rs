//! Shared state handed to every Axum handler.

use sea_orm::DatabaseConnection;

/// Application state available to API route handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// Public base URL sign-in links are built against
    pub app_url: String,
}

/// Builds state from a bare connection, filling in a local base URL.
///
/// Used by the test setup, which has no environment configuration to read.
impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            app_url: "http://localhost:8080".to_string(),
        }
    }
}
