use sea_orm::DatabaseConnection;

/// Application state containing shared resources
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Database connection (absent only in handler-only tests)
    db: Option<DatabaseConnection>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Some(db) }
    }

    /// State with no database; every data route answers 503.
    pub fn without_db() -> Self {
        Self { db: None }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
