pub mod groups;
pub mod health;

use axum::http::{Method, StatusCode, Uri};
use tracing::warn;

use crate::error::ApiError;

/// Preflight answer. Negotiation itself happens in the CORS middleware.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Fallback for paths without a route. `OPTIONS` is accepted anywhere.
pub async fn unknown(method: Method, uri: Uri) -> Result<StatusCode, ApiError> {
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK);
    }
    warn!("Unknown: HTTP {} {}", method, uri.path());
    Err(ApiError::NotFound("unknown request".to_string()))
}
