//! # Imovia Error Infrastructure
//!
//! Error types and API response handling for the imovia application.
//!
//! Domain rule violations are carried as structured kinds on [`AppError`];
//! HTTP status codes and envelope codes are derived from the kind, never
//! from message text.

pub mod response;

pub use response::{ApiResponse, ErrorBody};

/// Convenience type alias for Result with AppError.
pub type Result<T, E = AppError> = std::result::Result<T, E>;

/// Main application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("NotFound: {message}")]
    NotFound {
        message: String,
    },

    #[error("BadRequest: {message}")]
    BadRequest {
        message: String,
    },

    #[error("Unauthorized: {message}")]
    Unauthorized {
        message: String,
    },

    #[error("Forbidden: {message}")]
    Forbidden {
        message: String,
    },

    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },

    #[error("Validation: {message}")]
    Validation {
        message: String,
    },

    #[error("Internal: {message}")]
    Internal {
        message: String,
    },

    #[error("Database: {message}")]
    Database {
        message: String,
    },

    #[error("Io: {message}")]
    Io {
        message: String,
    },

    #[error("Config: {message}")]
    Config {
        message: String,
    },
}

impl AppError {
    /// Create a not found error.
    #[inline]
    pub fn not_found(message: impl ToString) -> Self {
        Self::NotFound {
            message: message.to_string(),
        }
    }

    /// Create a bad request error.
    #[inline]
    pub fn bad_request(message: impl ToString) -> Self {
        Self::BadRequest {
            message: message.to_string(),
        }
    }

    /// Create an unauthorized error.
    #[inline]
    pub fn unauthorized(message: impl ToString) -> Self {
        Self::Unauthorized {
            message: message.to_string(),
        }
    }

    /// Create a forbidden error.
    #[inline]
    pub fn forbidden(message: impl ToString) -> Self {
        Self::Forbidden {
            message: message.to_string(),
        }
    }

    /// Create a conflict error.
    #[inline]
    pub fn conflict(message: impl ToString) -> Self {
        Self::Conflict {
            message: message.to_string(),
        }
    }

    /// Create a validation error.
    #[inline]
    pub fn validation(message: impl ToString) -> Self {
        Self::Validation {
            message: message.to_string(),
        }
    }

    /// Create an internal error.
    #[inline]
    pub fn internal(message: impl ToString) -> Self {
        Self::Internal {
            message: message.to_string(),
        }
    }

    /// Create a database error.
    #[inline]
    pub fn database(message: impl ToString) -> Self {
        Self::Database {
            message: message.to_string(),
        }
    }

    /// Create a config error.
    #[inline]
    pub fn config(message: impl ToString) -> Self {
        Self::Config {
            message: message.to_string(),
        }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> http::StatusCode {
        match self {
            AppError::NotFound {
                ..
            } => http::StatusCode::NOT_FOUND,
            AppError::BadRequest {
                ..
            } => http::StatusCode::BAD_REQUEST,
            AppError::Validation {
                ..
            } => http::StatusCode::BAD_REQUEST,
            AppError::Unauthorized {
                ..
            } => http::StatusCode::UNAUTHORIZED,
            AppError::Forbidden {
                ..
            } => http::StatusCode::FORBIDDEN,
            AppError::Conflict {
                ..
            } => http::StatusCode::CONFLICT,
            AppError::Internal {
                ..
            } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Database {
                ..
            } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Io {
                ..
            } => http::StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config {
                ..
            } => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the envelope error code.
    ///
    /// Internal failure kinds (database, IO, config) all surface to clients
    /// as `INTERNAL_SERVER_ERROR`.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound {
                ..
            } => "NOT_FOUND",
            AppError::BadRequest {
                ..
            } => "BAD_REQUEST",
            AppError::Validation {
                ..
            } => "VALIDATION_ERROR",
            AppError::Unauthorized {
                ..
            } => "UNAUTHORIZED",
            AppError::Forbidden {
                ..
            } => "FORBIDDEN",
            AppError::Conflict {
                ..
            } => "CONFLICT",
            AppError::Internal {
                ..
            }
            | AppError::Database {
                ..
            }
            | AppError::Io {
                ..
            }
            | AppError::Config {
                ..
            } => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Get the raw error message.
    pub fn message(&self) -> &str {
        match self {
            AppError::NotFound {
                message,
            }
            | AppError::BadRequest {
                message,
            }
            | AppError::Unauthorized {
                message,
            }
            | AppError::Forbidden {
                message,
            }
            | AppError::Conflict {
                message,
            }
            | AppError::Validation {
                message,
            }
            | AppError::Internal {
                message,
            }
            | AppError::Database {
                message,
            }
            | AppError::Io {
                message,
            }
            | AppError::Config {
                message,
            } => message,
        }
    }

    /// Get the message safe to return to clients.
    ///
    /// Internal failure details never leave the server; clients get a
    /// generic message while the original is logged.
    pub fn client_message(&self) -> String {
        match self.status() {
            http::StatusCode::INTERNAL_SERVER_ERROR => "Internal server error".to_string(),
            _ => self.message().to_string(),
        }
    }

    /// Add context to the error message, preserving the kind.
    #[inline]
    pub fn context(self, context: impl ToString) -> Self {
        let message = format!("{}: {}", context.to_string(), self.message());
        match self {
            AppError::NotFound {
                ..
            } => AppError::NotFound {
                message,
            },
            AppError::BadRequest {
                ..
            } => AppError::BadRequest {
                message,
            },
            AppError::Unauthorized {
                ..
            } => AppError::Unauthorized {
                message,
            },
            AppError::Forbidden {
                ..
            } => AppError::Forbidden {
                message,
            },
            AppError::Conflict {
                ..
            } => AppError::Conflict {
                message,
            },
            AppError::Validation {
                ..
            } => AppError::Validation {
                message,
            },
            AppError::Internal {
                ..
            } => AppError::Internal {
                message,
            },
            AppError::Database {
                ..
            } => AppError::Database {
                message,
            },
            AppError::Io {
                ..
            } => AppError::Io {
                message,
            },
            AppError::Config {
                ..
            } => AppError::Config {
                message,
            },
        }
    }
}

/// Convert anyhow errors to AppError.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

/// Convert std::io errors to AppError.
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

/// Convert Sea-ORM database errors to AppError.
impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database {
            message: err.to_string(),
        }
    }
}

/// Convert Sea-ORM transaction errors to AppError, unwrapping domain errors
/// raised inside the closure.
impl From<sea_orm::TransactionError<AppError>> for AppError {
    fn from(err: sea_orm::TransactionError<AppError>) -> Self {
        match err {
            sea_orm::TransactionError::Connection(e) => e.into(),
            sea_orm::TransactionError::Transaction(e) => e,
        }
    }
}

/// Convert validator validation errors to AppError.
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(_, errors)| {
                errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|s| s.to_string())
                            .unwrap_or_else(|| "Invalid value".to_string())
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        let message = if messages.is_empty() {
            "Validation failed".to_string()
        }
        else {
            messages.join(", ")
        };

        Self::Validation {
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_not_found() {
        let err = AppError::not_found("Region not found");
        assert_eq!(err.status(), http::StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "NOT_FOUND");
        assert!(err.to_string().contains("NotFound"));
    }

    #[test]
    fn test_error_bad_request() {
        let err = AppError::bad_request("Cannot update a deleted broker profile");
        assert_eq!(err.status(), http::StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "BAD_REQUEST");
    }

    #[test]
    fn test_error_unauthorized() {
        let err = AppError::unauthorized("Missing API key");
        assert_eq!(err.status(), http::StatusCode::UNAUTHORIZED);
        assert_eq!(err.code(), "UNAUTHORIZED");
    }

    #[test]
    fn test_error_forbidden() {
        let err = AppError::forbidden("Region is in use");
        assert_eq!(err.status(), http::StatusCode::FORBIDDEN);
        assert_eq!(err.code(), "FORBIDDEN");
    }

    #[test]
    fn test_error_conflict() {
        let err = AppError::conflict("Team already has a leader");
        assert_eq!(err.status(), http::StatusCode::CONFLICT);
        assert_eq!(err.code(), "CONFLICT");
    }

    #[test]
    fn test_error_validation_maps_to_400() {
        let err = AppError::validation("Team must have at least one leader");
        assert_eq!(err.status(), http::StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_internal_kinds_share_client_code() {
        for err in [
            AppError::internal("boom"),
            AppError::database("connection refused"),
            AppError::config("DATABASE_URL not set"),
            AppError::Io {
                message: "broken pipe".to_string(),
            },
        ] {
            assert_eq!(err.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(err.code(), "INTERNAL_SERVER_ERROR");
        }
    }

    #[test]
    fn test_client_message_hides_internal_details() {
        let err = AppError::database("password authentication failed for user \"imovia\"");
        assert_eq!(err.client_message(), "Internal server error");

        let err = AppError::not_found("Member not found");
        assert_eq!(err.client_message(), "Member not found");
    }

    #[test]
    fn test_error_context() {
        let err = AppError::not_found("Neighborhood not found").context("Replacing region neighborhoods");
        assert_eq!(
            err.message(),
            "Replacing region neighborhoods: Neighborhood not found"
        );
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn test_from_db_err() {
        let err: AppError = sea_orm::DbErr::Custom("bad row".to_string()).into();
        assert_eq!(err.code(), "INTERNAL_SERVER_ERROR");
    }

    #[test]
    fn test_from_transaction_error_unwraps_domain_error() {
        let err: AppError =
            sea_orm::TransactionError::Transaction(AppError::conflict("Team already has a leader")).into();
        assert_eq!(err.code(), "CONFLICT");

        let err: AppError = sea_orm::TransactionError::<AppError>::Connection(sea_orm::DbErr::Custom(
            "lost connection".to_string(),
        ))
        .into();
        assert_eq!(err.code(), "INTERNAL_SERVER_ERROR");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AppError = io_err.into();
        assert_eq!(err.code(), "INTERNAL_SERVER_ERROR");
        assert_eq!(err.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_from_anyhow() {
        let err: AppError = anyhow::anyhow!("unexpected").into();
        assert_eq!(err.code(), "INTERNAL_SERVER_ERROR");
    }

    #[test]
    fn test_from_validation_errors() {
        use validator::Validate;

        #[derive(Validate)]
        struct TestStruct {
            #[validate(range(min = 0, max = 5, message = "Classification out of range"))]
            classification: i32,
        }

        let s = TestStruct {
            classification: 100,
        };
        let errors = s.validate().unwrap_err();
        let err: AppError = errors.into();

        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert!(err.message().contains("Classification out of range"));
    }
}
