// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use crate::errors::domain::{
    ConflictKind, DomainError, ForbiddenKind, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_400() {
    let de = DomainError::validation(ValidationKind::Other("VALIDATION_ERROR".into()), "bad field");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 400);

    let de = DomainError::validation(ValidationKind::InvalidHex, "not a color");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::InvalidHex);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_duplicate_hex_to_400() {
    let dup = DomainError::conflict(ConflictKind::DuplicateHex, "exists");
    let app: AppError = dup.into();
    assert_eq!(app.code().as_str(), "DUPLICATE_HEX");
    assert_eq!(app.status().as_u16(), 400);

    let other = DomainError::conflict(ConflictKind::Other("Unique".into()), "generic conflict");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::PaletteEntry, "no entry");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "PALETTE_ENTRY_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let nf = DomainError::not_found(NotFoundKind::SelectedColor, "no color");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "SELECTED_COLOR_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn maps_forbidden() {
    let fb = DomainError::forbidden(ForbiddenKind::NotRemovable, "protected");
    let app: AppError = fb.into();
    assert_eq!(app.code().as_str(), "PALETTE_ENTRY_NOT_REMOVABLE");
    assert_eq!(app.status().as_u16(), 403);
}

#[test]
fn maps_infra() {
    let t = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    let app: AppError = t.into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 504);
    assert!(matches!(app, AppError::Timeout { .. }));

    let down = DomainError::infra(InfraErrorKind::DbUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let other = DomainError::infra(InfraErrorKind::Other("DbErr".into()), "boom");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "DB_ERROR");
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn maps_data_corruption() {
    let bad = DomainError::infra(InfraErrorKind::DataCorruption, "stored hex 'zz'");
    let app: AppError = bad.into();
    assert_eq!(app.code().as_str(), "DATA_CORRUPTION");
    assert_eq!(app.status().as_u16(), 500);
    assert!(matches!(app, AppError::DataCorruption { .. }));
}
