use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::is_sqlite_memory;
use crate::error::AppError;

/// Open a pooled connection. This function does NOT run any migrations.
pub async fn connect_db(database_url: &str) -> Result<DatabaseConnection, AppError> {
    let mut options = ConnectOptions::new(database_url.to_string());
    options
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    if is_sqlite_memory(database_url) {
        // Each in-memory connection is its own database; keep exactly one alive.
        options
            .max_connections(1)
            .min_connections(1);
        // idle_timeout / max_lifetime stay None (the ConnectOptions default);
        // sea-orm 1.1 setters only accept a concrete Duration.
    }

    let conn = Database::connect(options).await?;
    info!(backend = ?conn.get_database_backend(), "db.connected");
    Ok(conn)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(database_url: &str) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(database_url).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    Ok(conn)
}
