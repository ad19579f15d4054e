//! # API Key Authentication Middleware
//!
//! Authenticates requests using the X-API-KEY header. The presented key is
//! compared against the configured key in constant time.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use error::AppError;
use subtle::ConstantTimeEq;
use tracing::warn;

use crate::AppState;

/// API key authentication middleware
///
/// Rejects the request with a 401 envelope when the X-API-KEY header is
/// missing or does not match the configured key.
pub async fn api_key_auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let presented = request
        .headers()
        .get("x-api-key")
        .and_then(|v| v.to_str().ok());

    match presented {
        Some(key) if keys_match(key, &state.api_key) => next.run(request).await,
        Some(_) => {
            warn!(path = %request.uri().path(), "Rejected request with invalid API key");
            AppError::unauthorized("Invalid API key").into_response()
        },
        None => {
            warn!(path = %request.uri().path(), "Rejected request without API key");
            AppError::unauthorized("Missing X-API-KEY header").into_response()
        },
    }
}

/// Constant-time comparison of the presented key against the expected key
fn keys_match(presented: &str, expected: &str) -> bool {
    presented.as_bytes().ct_eq(expected.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match_equal() {
        assert!(keys_match("imovia-key-123", "imovia-key-123"));
    }

    #[test]
    fn test_keys_match_different() {
        assert!(!keys_match("imovia-key-123", "imovia-key-124"));
    }

    #[test]
    fn test_keys_match_length_mismatch() {
        assert!(!keys_match("short", "a-much-longer-key"));
    }

    #[test]
    fn test_keys_match_empty_presented() {
        assert!(!keys_match("", "expected"));
    }
}
