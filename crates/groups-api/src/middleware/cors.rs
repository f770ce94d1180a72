//! Cross-origin negotiation applied to every request, preflight or not.

use axum::{
    extract::{Request, State},
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_HEADERS,
            ACCESS_CONTROL_REQUEST_METHOD, ORIGIN,
        },
        HeaderMap, HeaderValue,
    },
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::debug;

use crate::error::ApiError;

const ALLOWED_METHODS: [&str; 5] = ["OPTIONS", "POST", "GET", "PUT", "DELETE"];
const ALLOW_METHODS_VALUE: &str = "OPTIONS, POST, GET, PUT, DELETE";

#[derive(Debug, Clone)]
pub struct CorsPolicy {
    allowed_origins: Vec<String>,
}

impl CorsPolicy {
    pub fn new(allowed_origins: Vec<String>) -> Self {
        Self { allowed_origins }
    }

    /// Response headers granted for a request, or the reason it is refused.
    ///
    /// A missing or empty `Origin` is always accepted and echoed back as is.
    pub fn negotiate(&self, headers: &HeaderMap) -> Result<HeaderMap, ApiError> {
        let mut granted = HeaderMap::new();

        let origin = headers
            .get(ORIGIN)
            .cloned()
            .unwrap_or_else(|| HeaderValue::from_static(""));
        let origin_allowed = origin.is_empty()
            || origin
                .to_str()
                .map(|o| self.allowed_origins.iter().any(|a| a == o))
                .unwrap_or(false);
        if !origin_allowed {
            return Err(ApiError::NotAllowed(format!(
                "origin:\"{}\" not allowed",
                String::from_utf8_lossy(origin.as_bytes())
            )));
        }
        granted.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);

        if let Some(method) = headers.get(ACCESS_CONTROL_REQUEST_METHOD) {
            match method.to_str() {
                Ok("") => {}
                Ok(m) if ALLOWED_METHODS.contains(&m) => {
                    granted.insert(
                        ACCESS_CONTROL_ALLOW_METHODS,
                        HeaderValue::from_static(ALLOW_METHODS_VALUE),
                    );
                }
                _ => {
                    return Err(ApiError::NotAllowed(format!(
                        "method:{} not allowed",
                        String::from_utf8_lossy(method.as_bytes())
                    )));
                }
            }
        }

        let wants_content_type = headers
            .get_all(ACCESS_CONTROL_REQUEST_HEADERS)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| v.split(','))
            .any(|h| h.trim().eq_ignore_ascii_case("content-type"));
        if wants_content_type {
            granted.insert(
                ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("Content-Type"),
            );
        }

        Ok(granted)
    }
}

pub async fn cors_middleware(
    State(policy): State<Arc<CorsPolicy>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    debug!("HTTP {} {}", request.method(), request.uri().path());

    let granted = policy.negotiate(request.headers())?;
    let mut response = next.run(request).await;
    response.headers_mut().extend(granted);
    Ok(response)
}
