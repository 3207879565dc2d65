//! Response shaping for forwarded calls.
//!
//! # Responsibilities
//! - Wrap the upstream body for the browser (200, text/xml, CORS)
//! - Map upstream failures to 500 with a free-text description
//!
//! # Design Decisions
//! - The upstream status and content type are not passed through
//! - Error bodies read `Error: <description>`

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::Response;

use crate::http::cors::CorsHeaders;
use crate::http::upstream::UpstreamError;

/// 200 with the upstream body as XML.
pub fn upstream_success(cors: &CorsHeaders, body: String) -> Response {
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = StatusCode::OK;
    cors.apply(response.headers_mut());
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("text/xml"));
    response
}

/// 500 describing why the upstream call failed.
pub fn upstream_failure(cors: &CorsHeaders, error: &UpstreamError) -> Response {
    let mut response = Response::new(Body::from(format!("Error: {}", error)));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    cors.apply_error(response.headers_mut());
    response.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response
}
