//! Authentication Gate
//!
//! Middleware protecting session routes. It reads the session token from
//! the `jwt` cookie and verifies it; on any failure the chain terminates
//! immediately with 401 - the inner service is never run without a
//! verified identity. On success the subject id is attached to request
//! extensions for handlers to extract.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::sessions::verify_token;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::shared::ObjectId;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "jwt";

/// Verified subject identity attached to request extensions
#[derive(Debug, Clone)]
pub struct AuthUser(pub ObjectId);

/// Authentication middleware
///
/// 1. Extract the token from the session cookie
/// 2. Verify signature, structure, and expiry
/// 3. Attach the subject id to request extensions
/// 4. Run the rest of the chain
///
/// Missing cookie or failed verification short-circuits with 401.
pub async fn auth_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = jar.get(SESSION_COOKIE).map(|c| c.value()).ok_or_else(|| {
        tracing::warn!("missing session cookie");
        ApiError::unauthorized("authorization required")
    })?;

    let subject = verify_token(token, &state.config.jwt_secret)?;

    request.extensions_mut().insert(AuthUser(subject));
    Ok(next.run(request).await)
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<AuthUser>().cloned().ok_or_else(|| {
            tracing::warn!("handler reached without authenticated identity");
            ApiError::unauthorized("authorization required")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::FromRequestParts;
    use axum::http::Request;

    #[tokio::test]
    async fn test_extractor_returns_attached_identity() {
        let subject = ObjectId::generate();
        let request = Request::builder()
            .uri("http://example.com/users/me")
            .extension(AuthUser(subject.clone()))
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let user = AuthUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(user.0, subject);
    }

    #[tokio::test]
    async fn test_extractor_rejects_missing_identity() {
        let request = Request::builder()
            .uri("http://example.com/users/me")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let result = AuthUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }
}
