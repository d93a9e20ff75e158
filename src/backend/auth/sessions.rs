//! Session Tokens
//!
//! JWT issue and verification for user sessions. The signing secret is
//! injected by callers (it lives in [`Config`](crate::backend::server::config::Config));
//! there is deliberately no environment read and no compiled-in fallback
//! here, so a forgettable dev secret cannot leak into production builds.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::backend::error::ApiError;
use crate::shared::ObjectId;

/// Session lifetime: one hour, matching the cookie Max-Age
pub const SESSION_TTL_SECS: u64 = 3600;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's identifier
    pub sub: String,
    /// Issued at (unix timestamp)
    pub iat: u64,
    /// Expiration (unix timestamp)
    pub exp: u64,
}

fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Issue a signed session token for a user
pub fn create_token(
    subject: &ObjectId,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let iat = now_unix();
    let claims = Claims {
        sub: subject.to_string(),
        iat,
        exp: iat + SESSION_TTL_SECS,
    };

    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify a session token and extract the subject identifier
///
/// Signature, structure, expiry, and subject shape are all checked; any
/// failure is `Unauthorized`.
pub fn verify_token(token: &str, secret: &str) -> Result<ObjectId, ApiError> {
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let data = decode::<Claims>(token, &key, &validation).map_err(|e| {
        tracing::warn!("token verification failed: {e}");
        ApiError::unauthorized("authorization required")
    })?;

    data.claims.sub.parse().map_err(|_| {
        tracing::warn!("token subject is not a valid id");
        ApiError::unauthorized("authorization required")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-signing-secret";

    #[test]
    fn test_token_round_trip() {
        let subject = ObjectId::generate();
        let token = create_token(&subject, SECRET).unwrap();
        assert!(!token.is_empty());

        let verified = verify_token(&token, SECRET).unwrap();
        assert_eq!(verified, subject);
    }

    #[test]
    fn test_rejects_malformed_token() {
        let result = verify_token("not.a.token", SECRET);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_wrong_secret() {
        let subject = ObjectId::generate();
        let token = create_token(&subject, SECRET).unwrap();

        let result = verify_token(&token, "some-other-secret");
        assert!(result.is_err());
    }

    #[test]
    fn test_claims_carry_expiry() {
        let subject = ObjectId::generate();
        let token = create_token(&subject, SECRET).unwrap();

        let key = DecodingKey::from_secret(SECRET.as_ref());
        let data = decode::<Claims>(&token, &key, &Validation::default()).unwrap();
        assert_eq!(data.claims.exp, data.claims.iat + SESSION_TTL_SECS);
    }
}
