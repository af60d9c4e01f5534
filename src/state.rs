//! Application state shared across handlers.

use crate::db::Repository;

/// Shared application state. The repository owns the connection pool,
/// constructed once at startup and injected here; there is no process-wide
/// database handle.
#[derive(Clone)]
pub struct AppState {
    pub db: Repository,
}

impl AppState {
    pub fn new(db: Repository) -> Self {
        Self { db }
    }
}
