//! # API Response Envelope
//!
//! The uniform response format for all API endpoints.
//!
//! ## Response Format
//!
//! ```json
//! {"success": true, "data": {...}, "message": "Region created"}
//! {"success": false, "error": {"code": "NOT_FOUND", "message": "Region not found"}}
//! ```

use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::AppError;

/// Error payload of the envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Stable machine-readable error code.
    pub code:    String,
    /// Human-readable error message.
    pub message: String,
}

/// API response envelope.
///
/// Every endpoint responds with this shape; `data`/`message` are present on
/// success, `error` on failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded.
    pub success: bool,

    /// Response payload (success only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Human-readable status message (success only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Error details (failure only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl<T> ApiResponse<T> {
    /// Create a success envelope with data and message.
    #[inline]
    pub fn ok(data: T, message: impl ToString) -> Self {
        Self {
            success: true,
            data:    Some(data),
            message: Some(message.to_string()),
            error:   None,
        }
    }

    /// Create an error envelope.
    #[inline]
    pub fn error(code: impl ToString, message: impl ToString) -> Self {
        Self {
            success: false,
            data:    None,
            message: None,
            error:   Some(ErrorBody {
                code:    code.to_string(),
                message: message.to_string(),
            }),
        }
    }

    /// Get a reference to the data if this is a success response.
    #[inline]
    pub fn data(&self) -> Option<&T> { self.data.as_ref() }

    /// Check if this is a success response.
    #[inline]
    pub fn is_success(&self) -> bool { self.success }

    /// Convert to a Result, surfacing the error code and message.
    #[inline]
    pub fn into_result(self) -> Result<T, (String, String)> {
        match (self.data, self.error) {
            (Some(data), _) if self.success => Ok(data),
            (_, Some(err)) => Err((err.code, err.message)),
            _ => Err(("INTERNAL_SERVER_ERROR".to_string(), "Empty response".to_string())),
        }
    }
}

/// Convert an [`AppError`] into the HTTP error envelope.
///
/// Internal details are logged server-side; the client only ever sees
/// [`AppError::client_message`].
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status() == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Request failed with internal error");
        }

        let envelope = ApiResponse::<()>::error(self.code(), self.client_message());
        let body = serde_json::to_string(&envelope).unwrap_or_else(|_| {
            r#"{"success":false,"error":{"code":"INTERNAL_SERVER_ERROR","message":"Internal server error"}}"#
                .to_string()
        });

        Response::builder()
            .status(self.status())
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_serialization() {
        let response = ApiResponse::ok(vec!["North", "South"], "Regions retrieved");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"success\":true"));
        assert!(json.contains("\"data\":[\"North\",\"South\"]"));
        assert!(json.contains("\"message\":\"Regions retrieved\""));
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn test_error_envelope_serialization() {
        let response: ApiResponse<()> = ApiResponse::error("NOT_FOUND", "Region not found");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"success\":false"));
        assert!(json.contains("\"code\":\"NOT_FOUND\""));
        assert!(json.contains("\"message\":\"Region not found\""));
        assert!(!json.contains("\"data\""));
    }

    #[test]
    fn test_error_envelope_roundtrip() {
        let response: ApiResponse<()> = ApiResponse::error("CONFLICT", "Team already has a leader");
        let json = serde_json::to_string(&response).unwrap();
        let parsed: ApiResponse<()> = serde_json::from_str(&json).unwrap();
        assert!(!parsed.is_success());
        let err = parsed.error.unwrap();
        assert_eq!(err.code, "CONFLICT");
        assert_eq!(err.message, "Team already has a leader");
    }

    #[test]
    fn test_into_result() {
        let ok: ApiResponse<u32> = ApiResponse::ok(7, "ok");
        assert_eq!(ok.into_result(), Ok(7));

        let err: ApiResponse<u32> = ApiResponse::error("FORBIDDEN", "Region is in use");
        assert_eq!(
            err.into_result(),
            Err(("FORBIDDEN".to_string(), "Region is in use".to_string()))
        );
    }

    #[test]
    fn test_app_error_into_response_status() {
        let response = AppError::not_found("Member not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::conflict("duplicate").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = AppError::validation("bad input").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::database("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_app_error_response_body_is_enveloped() {
        let response = AppError::forbidden("Neighborhood is in use").into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: ApiResponse<()> = serde_json::from_slice(&bytes).unwrap();
        assert!(!parsed.success);
        assert_eq!(parsed.error.unwrap().code, "FORBIDDEN");
    }

    #[tokio::test]
    async fn test_internal_error_body_is_generic() {
        let response = AppError::database("secret connection string leaked").into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.contains("Internal server error"));
        assert!(!body.contains("secret"));
    }
}
