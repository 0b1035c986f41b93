use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Row identity taken from the `{id}` path segment.
///
/// Existence is not checked here; the service decides between 404 and 403.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryId(pub i64);

impl EntryId {
    fn parse(raw: Option<&str>) -> Result<Self, AppError> {
        let raw = raw.ok_or_else(|| {
            AppError::bad_request(ErrorCode::InvalidId, "Missing id parameter".to_string())
        })?;

        raw.parse::<i64>().map(EntryId).map_err(|_| {
            AppError::bad_request(ErrorCode::InvalidId, format!("Invalid id: {raw}"))
        })
    }
}

impl FromRequest for EntryId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::parse(req.match_info().get("id")))
    }
}
