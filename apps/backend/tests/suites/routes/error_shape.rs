use actix_web::http::StatusCode;
use actix_web::{test, web, HttpResponse};
use backend::{build_state, AppError, ErrorCode};
use serde_json::Value;

use crate::common::assert_problem_details_structure;
use crate::support::app_builder::create_test_app;

/// Test endpoint that returns a validation error (400)
async fn test_validation_error() -> Result<HttpResponse, AppError> {
    Err(AppError::invalid(
        ErrorCode::InvalidHex,
        "'zzz' is not a hex color".to_string(),
    ))
}

/// Test endpoint that returns a duplicate error (400)
async fn test_conflict_error() -> Result<HttpResponse, AppError> {
    Err(AppError::conflict(
        ErrorCode::DuplicateHex,
        "Color #ffffff already exists".to_string(),
    ))
}

/// Test endpoint that returns a not found error (404)
async fn test_not_found_error() -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(
        ErrorCode::PaletteEntryNotFound,
        "Color wheel entry 7 not found".to_string(),
    ))
}

/// Test endpoint that returns a forbidden error (403)
async fn test_forbidden_error() -> Result<HttpResponse, AppError> {
    Err(AppError::forbidden(
        ErrorCode::PaletteEntryNotRemovable,
        "Color #000000 cannot be removed".to_string(),
    ))
}

/// Test endpoint that returns an internal server error (500)
async fn test_internal_error() -> Result<HttpResponse, AppError> {
    Err(AppError::internal("Something broke"))
}

/// Test endpoint that returns a database unavailable error (503)
async fn test_db_unavailable_error() -> Result<HttpResponse, AppError> {
    Err(AppError::db_unavailable())
}

// handler-only: validates error shape; no DB
#[actix_web::test]
async fn test_all_error_responses_conform_to_problem_details() -> Result<(), AppError> {
    let state = build_state().build().await?;
    let app = create_test_app(state)
        .with_routes(|cfg| {
            cfg.route("/_test/validation", web::get().to(test_validation_error))
                .route("/_test/conflict", web::get().to(test_conflict_error))
                .route("/_test/not_found", web::get().to(test_not_found_error))
                .route("/_test/forbidden", web::get().to(test_forbidden_error))
                .route("/_test/internal", web::get().to(test_internal_error))
                .route(
                    "/_test/db_unavailable",
                    web::get().to(test_db_unavailable_error),
                );
        })
        .build()
        .await?;

    let cases = [
        ("/_test/validation", 400, "INVALID_HEX", "not a hex color"),
        ("/_test/conflict", 400, "DUPLICATE_HEX", "already exists"),
        ("/_test/not_found", 404, "PALETTE_ENTRY_NOT_FOUND", "not found"),
        (
            "/_test/forbidden",
            403,
            "PALETTE_ENTRY_NOT_REMOVABLE",
            "cannot be removed",
        ),
        ("/_test/internal", 500, "INTERNAL", "Something broke"),
        (
            "/_test/db_unavailable",
            503,
            "DB_UNAVAILABLE",
            "Database unavailable",
        ),
    ];

    for (uri, status, code, detail) in cases {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details_structure(resp, status, code, Some(detail)).await;
    }

    Ok(())
}

#[actix_web::test]
async fn test_title_is_humanized_code() -> Result<(), AppError> {
    let state = build_state().build().await?;
    let app = create_test_app(state)
        .with_routes(|cfg| {
            cfg.route("/_test/forbidden", web::get().to(test_forbidden_error));
        })
        .build()
        .await?;

    let req = test::TestRequest::get().uri("/_test/forbidden").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Palette Entry Not Removable");
    assert_eq!(
        body["type"],
        "https://palette.local/errors/PALETTE_ENTRY_NOT_REMOVABLE"
    );

    Ok(())
}

#[actix_web::test]
async fn test_routes_without_db_return_service_unavailable() -> Result<(), AppError> {
    let state = build_state().build().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    for uri in ["/color-wheel/", "/selected-colors/", "/selected-colors/mix"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details_structure(resp, 503, "DB_UNAVAILABLE", None).await;
    }

    Ok(())
}
