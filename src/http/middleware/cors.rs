//! Permissive CORS middleware.
//!
//! # Responsibilities
//! - Set the fixed CORS headers on every response, error and fallback
//!   responses included
//! - Answer `OPTIONS` preflight requests with `200 OK` and an empty body,
//!   without ever invoking the inner handler
//!
//! # Design Decisions
//! - Policy is hard-coded and maximally permissive: any origin, no
//!   credentials, no `Max-Age`, no `Vary`. Local development only.
//! - Headers are applied to the outgoing response, so downstream handlers
//!   cannot unset or override them.

use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::Response,
};

/// Value of `Access-Control-Allow-Origin` on every response.
pub const ALLOW_ORIGIN: &str = "*";
/// Value of `Access-Control-Allow-Methods` on every response.
pub const ALLOW_METHODS: &str = "POST, GET, OPTIONS, PUT, DELETE";
/// Value of `Access-Control-Allow-Headers` on every response.
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Middleware applying the permissive CORS policy.
///
/// Infallible: every request produces a response, either the preflight
/// short-circuit or the inner handler's response with headers applied.
pub async fn cors_middleware(request: Request, next: Next) -> Response {
    // Preflight: answer directly, the inner handler never runs.
    if request.method() == Method::OPTIONS {
        tracing::debug!(path = %request.uri().path(), "Answering CORS preflight");

        let mut response = Response::new(Body::empty());
        *response.status_mut() = StatusCode::OK;
        apply_cors_headers(&mut response);
        return response;
    }

    let mut response = next.run(request).await;
    apply_cors_headers(&mut response);
    response
}

fn apply_cors_headers(response: &mut Response) {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
}
