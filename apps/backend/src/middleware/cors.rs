use std::env;

use actix_cors::Cors;
use actix_web::http::header;

/// Origins used when `CORS_ALLOWED_ORIGINS` is unset or has no valid entry:
/// the Vite dev server.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://127.0.0.1:5173"];

/// Parse a comma-separated origin list, dropping empty, "null" and
/// non-http(s) entries. Falls back to [`DEFAULT_ALLOWED_ORIGINS`].
pub fn parse_allowed_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(|s| s.trim_end_matches('/').to_string())
        .collect();

    if origins.is_empty() {
        DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect()
    } else {
        origins
    }
}

/// Build CORS middleware for the front-end:
/// explicit origin allow-list, credentials allowed, any method and header.
pub fn cors_middleware() -> Cors {
    // CORS_ALLOWED_ORIGINS=http://localhost:5173,https://palette.example.com
    let allowed_raw = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default();

    let mut cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .expose_headers(vec![
            header::HeaderName::from_static("x-trace-id"),
            header::HeaderName::from_static("x-request-id"),
        ])
        .max_age(3600);

    for origin in parse_allowed_origins(&allowed_raw) {
        cors = cors.allowed_origin(&origin);
    }

    cors
}
