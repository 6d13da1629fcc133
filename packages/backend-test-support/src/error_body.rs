//! Assertions for the API's JSON error contract.
//!
//! Every error is `{ "error": <message>, "code": <CODE>, "trace_id": <id> }`
//! with an `x-trace-id` header equal to the body's `trace_id`. This module
//! mirrors that shape locally so it does not depend on backend types.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Local mirror of the backend's error body
#[derive(Debug, Deserialize)]
pub struct ErrorBodyLike {
    pub error: String,
    pub code: String,
    pub trace_id: String,
}

/// Assert that raw response parts follow the error contract and return the
/// parsed body for further checks.
pub fn assert_error_body_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_status: StatusCode,
    expected_code: &str,
    expected_error_contains: Option<&str>,
) -> ErrorBodyLike {
    assert_eq!(status, expected_status);

    let body: ErrorBodyLike = serde_json::from_slice(body_bytes).unwrap_or_else(|e| {
        panic!(
            "response body should be an error JSON object ({e}): {}",
            String::from_utf8_lossy(body_bytes)
        )
    });

    let trace_header = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8");
    assert!(!trace_header.is_empty(), "x-trace-id should not be empty");
    assert_eq!(
        body.trace_id, trace_header,
        "trace_id in body should match x-trace-id header"
    );

    assert_eq!(body.code, expected_code);
    assert!(!body.error.is_empty(), "error message should not be empty");

    if let Some(expected) = expected_error_contains {
        assert!(
            body.error.contains(expected),
            "Expected error to contain '{}', but got '{}'",
            expected,
            body.error
        );
    }

    body
}

/// Assert that a `ServiceResponse` follows the error contract.
pub async fn assert_error_body(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
    expected_error_contains: Option<&str>,
) -> ErrorBodyLike {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_error_body_from_parts(
        status,
        &headers,
        &body,
        expected_status,
        expected_code,
        expected_error_contains,
    )
}
