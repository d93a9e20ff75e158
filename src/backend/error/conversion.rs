//! Error Conversion
//!
//! `IntoResponse` for [`ApiError`], so handlers can return it directly.
//! The body is the uniform `{"message": ...}` JSON shape the client SDK
//! expects.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::backend::error::types::ApiError;
use crate::shared::MessageResponse;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed with internal error");
        }
        let body = Json(MessageResponse {
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = ApiError::not_found("card not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: MessageResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.message, "card not found");
    }

    #[tokio::test]
    async fn test_internal_error_is_generic() {
        let response = ApiError::Internal.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: MessageResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.message, "internal server error");
    }
}
