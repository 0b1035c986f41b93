#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Validate that a response is a ProblemDetails error whose trace_id matches
/// the X-Trace-Id header.
pub async fn assert_problem_details_structure(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_code: &str,
    expected_detail_contains: Option<&str>,
) {
    let expected_status =
        StatusCode::from_u16(expected_status).expect("expected status should be valid");
    backend_test_support::assert_problem_details(
        resp,
        expected_status,
        expected_code,
        expected_detail_contains,
    )
    .await;
}

/// Read a JSON body and return it as an array, failing loudly otherwise.
pub async fn read_json_array(resp: ServiceResponse<BoxBody>) -> Vec<Value> {
    let body: Value = test::read_body_json(resp).await;
    body.as_array()
        .cloned()
        .unwrap_or_else(|| panic!("expected JSON array, got {body}"))
}
