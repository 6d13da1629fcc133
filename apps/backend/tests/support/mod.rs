#![allow(dead_code)]

pub mod app_builder;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, Error};
use serde_json::Value;

pub use app_builder::create_test_app;

/// POST a JSON body and return the raw response.
pub async fn post_json<S>(app: &S, uri: &str, body: Value) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post().uri(uri).set_json(body).to_request();
    test::call_service(app, req).await
}

/// POST a JSON body, assert 200 and return the parsed response body.
pub async fn post_ok<S>(app: &S, uri: &str, body: Value) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let resp = post_json(app, uri, body).await;
    assert!(
        resp.status().is_success(),
        "POST {uri} failed with {}",
        resp.status()
    );
    test::read_body_json(resp).await
}

/// GET /api/game_state and return the parsed body.
pub async fn game_state<S>(app: &S) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::get().uri("/api/game_state").to_request();
    let resp = test::call_service(app, req).await;
    assert!(resp.status().is_success());
    test::read_body_json(resp).await
}
