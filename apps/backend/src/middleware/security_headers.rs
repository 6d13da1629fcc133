//! Security headers middleware.
//!
//! Every response gets nosniff, frame denial and a strict referrer policy.
//! JSON endpoints (`/api/*`, `/health`) additionally get a no-content CSP and
//! `Cache-Control: no-store` so browsers never show a stale scoreboard.

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{self, HeaderMap, HeaderName, HeaderValue};
use actix_web::Error as ActixError;
use futures_util::future::{ready, LocalBoxFuture, Ready};

const API_CSP: &str = "default-src 'none'; frame-ancestors 'none'";

pub struct SecurityHeaders;

impl<S, B> Transform<S, ServiceRequest> for SecurityHeaders
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = SecurityHeadersMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityHeadersMiddleware { service }))
    }
}

pub struct SecurityHeadersMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for SecurityHeadersMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let is_json_endpoint = is_json_endpoint(req.path());
        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;
            apply_security_headers(res.headers_mut(), is_json_endpoint);
            Ok(res)
        })
    }
}

fn is_json_endpoint(path: &str) -> bool {
    path.starts_with("/api/") || path == "/health"
}

fn apply_security_headers(headers: &mut HeaderMap, is_json_endpoint: bool) {
    headers.insert(
        HeaderName::from_static("x-content-type-options"),
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        HeaderName::from_static("x-frame-options"),
        HeaderValue::from_static("DENY"),
    );
    headers.insert(
        HeaderName::from_static("referrer-policy"),
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    if is_json_endpoint {
        headers.insert(
            HeaderName::from_static("content-security-policy"),
            HeaderValue::from_static(API_CSP),
        );
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    }
}
