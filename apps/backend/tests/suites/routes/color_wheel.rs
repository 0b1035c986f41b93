use actix_web::http::StatusCode;
use actix_web::test;
use backend::extractors::validated_json::MAX_BODY_BYTES;
use backend::{AppError, DEFAULT_PALETTE};
use serde_json::{json, Value};

use crate::common::{assert_problem_details_structure, read_json_array};
use crate::support::app_builder::create_test_app;
use crate::support::build_test_state;

#[actix_web::test]
async fn test_startup_lists_exactly_the_default_palette() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/color-wheel/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let entries = read_json_array(resp).await;
    assert_eq!(entries.len(), DEFAULT_PALETTE.len());

    let hexes: Vec<&str> = entries.iter().filter_map(|e| e["hex"].as_str()).collect();
    assert_eq!(hexes, DEFAULT_PALETTE.to_vec());
    assert!(entries.iter().all(|e| e["removable"] == json!(false)));
    assert!(entries.iter().all(|e| e["id"].is_i64()));

    Ok(())
}

#[actix_web::test]
async fn test_add_list_delete_round_trip() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    // Add
    let req = test::TestRequest::post()
        .uri("/color-wheel/")
        .set_json(json!({ "hex": "#123456" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["hex"], "#123456");
    assert_eq!(created["removable"], json!(true));
    let id = created["id"].as_i64().expect("id should be an integer");

    // Listed after the defaults
    let req = test::TestRequest::get().uri("/color-wheel/").to_request();
    let entries = read_json_array(test::call_service(&app, req).await).await;
    assert_eq!(entries.len(), DEFAULT_PALETTE.len() + 1);
    assert_eq!(entries.last().map(|e| e["id"].clone()), Some(json!(id)));

    // Delete
    let req = test::TestRequest::delete()
        .uri(&format!("/color-wheel/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "ok": true }));

    // Gone
    let req = test::TestRequest::get().uri("/color-wheel/").to_request();
    let entries = read_json_array(test::call_service(&app, req).await).await;
    assert_eq!(entries.len(), DEFAULT_PALETTE.len());
    assert!(entries.iter().all(|e| e["hex"] != "#123456"));

    Ok(())
}

#[actix_web::test]
async fn test_add_respects_explicit_removable_false() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/color-wheel")
        .set_json(json!({ "hex": "abcdef", "removable": false }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["hex"], "#abcdef");
    assert_eq!(created["removable"], json!(false));

    let id = created["id"].as_i64().expect("id should be an integer");
    let req = test::TestRequest::delete()
        .uri(&format!("/color-wheel/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 403, "PALETTE_ENTRY_NOT_REMOVABLE", None).await;

    Ok(())
}

#[actix_web::test]
async fn test_duplicate_hex_is_rejected_in_any_case() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    // Seeded default, different casing and no leading '#'
    let req = test::TestRequest::post()
        .uri("/color-wheel/")
        .set_json(json!({ "hex": "FF0000" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 400, "DUPLICATE_HEX", Some("#ff0000")).await;

    let req = test::TestRequest::get().uri("/color-wheel/").to_request();
    let entries = read_json_array(test::call_service(&app, req).await).await;
    assert_eq!(entries.len(), DEFAULT_PALETTE.len());

    Ok(())
}

#[actix_web::test]
async fn test_deleting_seeded_entry_is_forbidden_and_keeps_row() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/color-wheel/").to_request();
    let entries = read_json_array(test::call_service(&app, req).await).await;
    let first_id = entries[0]["id"].as_i64().expect("id should be an integer");

    let req = test::TestRequest::delete()
        .uri(&format!("/color-wheel/{first_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 403, "PALETTE_ENTRY_NOT_REMOVABLE", Some("#000000"))
        .await;

    let req = test::TestRequest::get().uri("/color-wheel/").to_request();
    let after = read_json_array(test::call_service(&app, req).await).await;
    assert_eq!(after, entries);

    Ok(())
}

#[actix_web::test]
async fn test_delete_unknown_id_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::delete()
        .uri("/color-wheel/999999")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 404, "PALETTE_ENTRY_NOT_FOUND", Some("999999")).await;

    Ok(())
}

#[actix_web::test]
async fn test_delete_non_numeric_id_is_bad_request() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::delete()
        .uri("/color-wheel/not-a-number")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 400, "INVALID_ID", None).await;

    Ok(())
}

#[actix_web::test]
async fn test_add_invalid_hex_is_rejected() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    for bad in ["", "#12345", "#gggggg", "red", "#1234567"] {
        let req = test::TestRequest::post()
            .uri("/color-wheel/")
            .set_json(json!({ "hex": bad }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details_structure(resp, 400, "INVALID_HEX", None).await;
    }

    Ok(())
}

#[actix_web::test]
async fn test_add_with_malformed_body_is_bad_request() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/color-wheel/")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"hex\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Missing required field
    let req = test::TestRequest::post()
        .uri("/color-wheel/")
        .set_json(json!({ "removable": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[actix_web::test]
async fn test_list_is_served_with_and_without_trailing_slash() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    for uri in ["/color-wheel", "/color-wheel/"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "GET {uri}");
    }

    Ok(())
}

#[actix_web::test]
async fn test_add_with_oversized_body_is_rejected() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    // Valid color plus an unknown field that pushes the body past the limit
    let padding = "x".repeat(MAX_BODY_BYTES);
    let req = test::TestRequest::post()
        .uri("/color-wheel/")
        .set_json(json!({ "hex": "#123456", "pad": padding }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 413, "PAYLOAD_TOO_LARGE", None).await;

    let req = test::TestRequest::get().uri("/color-wheel/").to_request();
    let entries = read_json_array(test::call_service(&app, req).await).await;
    assert!(entries.iter().all(|e| e["hex"] != "#123456"));

    Ok(())
}

#[actix_web::test]
async fn test_add_with_non_json_content_type_is_rejected() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/color-wheel/")
        .insert_header(("content-type", "text/plain"))
        .set_payload(r##"{"hex":"#123456"}"##)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_structure(resp, 415, "UNSUPPORTED_MEDIA_TYPE", Some("text/plain"))
        .await;

    Ok(())
}
