//! Error Taxonomy
//!
//! One variant per client-visible failure class. Store and crypto failures
//! are caught in handlers and re-raised as one of these; anything
//! unclassified collapses to `Internal`, which never echoes detail.

use axum::http::StatusCode;
use thiserror::Error;

/// Backend error taxonomy
///
/// Each variant maps to exactly one HTTP status code. The carried message
/// is the client-visible `{"message": ...}` body; `Internal` carries none
/// so internal detail cannot leak.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed input, identifier, or schema violation (400)
    #[error("{0}")]
    BadRequest(String),

    /// Missing or invalid credentials or session (401)
    #[error("{0}")]
    Unauthorized(String),

    /// Authenticated but not entitled (403)
    #[error("{0}")]
    Forbidden(String),

    /// Resource absent (404)
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness violation (409)
    #[error("{0}")]
    Conflict(String),

    /// Unexpected failure; details stay server-side (500)
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// PostgreSQL SQLSTATE for unique constraint violations
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL SQLSTATE for foreign key violations
const FOREIGN_KEY_VIOLATION: &str = "23503";

impl From<sqlx::Error> for ApiError {
    /// Map store failures to the taxonomy
    ///
    /// A unique violation surfaces as `Conflict` (duplicate email on
    /// signup). A foreign key violation surfaces as `NotFound`: it means
    /// the referenced row disappeared between an existence check and the
    /// dependent insert, as when a card is deleted while a like for it is
    /// in flight. Everything else is logged and collapsed to `Internal`.
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            match db.code().as_deref() {
                Some(UNIQUE_VIOLATION) => {
                    return Self::Conflict("a user with this email already exists".to_string());
                }
                Some(FOREIGN_KEY_VIOLATION) => {
                    return Self::NotFound("resource not found".to_string());
                }
                _ => {}
            }
        }
        tracing::error!("database error: {err:?}");
        Self::Internal
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        tracing::error!("bcrypt error: {err:?}");
        Self::Internal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::bad_request("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::unauthorized("x").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::forbidden("x").status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::conflict("x").status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_error_hides_detail() {
        assert_eq!(ApiError::Internal.to_string(), "internal server error");
    }

    #[test]
    fn test_row_not_found_collapses_to_internal() {
        // Handlers use fetch_optional and map absence to NotFound themselves;
        // a RowNotFound reaching this conversion is an unexpected failure.
        let err: ApiError = sqlx::Error::RowNotFound.into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
