use std::env;

use crate::error::AppError;

/// Environment variable holding the database connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Reads the connection string from the environment.
///
/// An unset variable is treated as empty, and an empty connection string is
/// a configuration error.
pub fn db_url() -> Result<String, AppError> {
    let raw = env::var(DATABASE_URL_VAR).unwrap_or_default();
    validate_db_url(&raw)
}

/// Trims and checks a connection string.
pub fn validate_db_url(raw: &str) -> Result<String, AppError> {
    let url = raw.trim();
    if url.is_empty() {
        return Err(AppError::config(format!(
            "Required environment variable '{DATABASE_URL_VAR}' is not set"
        )));
    }
    Ok(url.to_string())
}

/// In-memory SQLite lives inside a single connection; the pool must not open more.
pub fn is_sqlite_memory(url: &str) -> bool {
    url.starts_with("sqlite:") && url.contains(":memory:")
}
