use actix_web::http::StatusCode;
use actix_web::{test, web, HttpResponse};
use scoreboard::infra::state::build_state;
use scoreboard::{AppError, ErrorCode};
use scoreboard_test_support::error_body::assert_error_body;
use serde_json::json;

use crate::support::{create_test_app, post_json, post_ok};

async fn always_internal() -> Result<HttpResponse, AppError> {
    Err(AppError::internal("Something broke"))
}

#[actix_web::test]
async fn test_empty_name_is_rejected() -> Result<(), AppError> {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await?;

    for body in [json!({"name": "   "}), json!({})] {
        let resp = post_json(&app, "/api/add_player", body).await;
        assert_error_body(
            resp,
            StatusCode::BAD_REQUEST,
            "INVALID_PLAYER_NAME",
            Some("cannot be empty"),
        )
        .await;
    }
    Ok(())
}

#[actix_web::test]
async fn test_duplicate_name_is_rejected() -> Result<(), AppError> {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await?;

    post_ok(&app, "/api/add_player", json!({"name": "A"})).await;
    let resp = post_json(&app, "/api/add_player", json!({"name": "A"})).await;
    assert_error_body(
        resp,
        StatusCode::BAD_REQUEST,
        "DUPLICATE_PLAYER",
        Some("already exists"),
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn test_unknown_player_is_rejected() -> Result<(), AppError> {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await?;

    let cases = [
        ("/api/add_score", json!({"player": "Ghost", "score": 10})),
        // Unknown player wins over a bad score
        ("/api/add_score", json!({"player": "Ghost", "score": "abc"})),
        ("/api/add_score", json!({"score": 10})),
        ("/api/remove_player", json!({"player": "Ghost"})),
        ("/api/remove_player", json!({})),
    ];
    for (uri, body) in cases {
        let resp = post_json(&app, uri, body).await;
        assert_error_body(
            resp,
            StatusCode::BAD_REQUEST,
            "PLAYER_NOT_FOUND",
            Some("not found"),
        )
        .await;
    }
    Ok(())
}

#[actix_web::test]
async fn test_non_numeric_score_is_rejected() -> Result<(), AppError> {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await?;

    post_ok(&app, "/api/add_player", json!({"name": "Alice"})).await;
    for score in [json!("abc"), json!(null), json!({"n": 5}), json!([5])] {
        let resp = post_json(&app, "/api/add_score", json!({"player": "Alice", "score": score})).await;
        assert_error_body(
            resp,
            StatusCode::BAD_REQUEST,
            "INVALID_SCORE",
            Some("must be a number"),
        )
        .await;
    }
    Ok(())
}

#[actix_web::test]
async fn test_bad_threshold_is_rejected() -> Result<(), AppError> {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await?;

    for body in [
        json!({"threshold": 0}),
        json!({"threshold": -50}),
        json!({"threshold": "high"}),
        json!({"threshold": null}),
        json!({}),
    ] {
        let resp = post_json(&app, "/api/set_threshold", body).await;
        assert_error_body(
            resp,
            StatusCode::BAD_REQUEST,
            "INVALID_THRESHOLD",
            Some("positive integer"),
        )
        .await;
    }
    Ok(())
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() -> Result<(), AppError> {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await?;

    let req = test::TestRequest::post()
        .uri("/api/add_player")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(
        resp,
        StatusCode::BAD_REQUEST,
        ErrorCode::BadRequest.as_str(),
        Some("Invalid JSON"),
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn test_oversized_body_is_bad_request() -> Result<(), AppError> {
    let mut state = build_state().build();
    state.config.max_json_payload_size = 16;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let resp = post_json(
        &app,
        "/api/add_player",
        json!({"name": "a name that is far too long for the limit"}),
    )
    .await;
    assert_error_body(
        resp,
        StatusCode::BAD_REQUEST,
        "BAD_REQUEST",
        Some("exceeds 16 bytes"),
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn test_trace_id_matches_request_id() -> Result<(), AppError> {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await?;

    let resp = post_json(&app, "/api/remove_player", json!({"player": "Nobody"})).await;
    let request_id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("x-request-id header");

    let body = assert_error_body(resp, StatusCode::BAD_REQUEST, "PLAYER_NOT_FOUND", None).await;
    assert_eq!(body.trace_id, request_id);
    assert_ne!(body.trace_id, scoreboard::trace_ctx::UNKNOWN_TRACE_ID);
    Ok(())
}

#[actix_web::test]
async fn test_internal_errors_use_same_shape() -> Result<(), AppError> {
    let app = create_test_app(build_state().build())
        .with_routes(|cfg| {
            cfg.route("/_test/internal", web::get().to(always_internal));
        })
        .build()
        .await?;

    let req = test::TestRequest::get().uri("/_test/internal").to_request();
    let resp = test::call_service(&app, req).await;
    assert_error_body(
        resp,
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL",
        Some("Something broke"),
    )
    .await;
    Ok(())
}
