//! Request and Response Types
//!
//! JSON shapes of the HTTP surface, shared by the backend handlers and the
//! client SDK so the two sides cannot drift apart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::object_id::ObjectId;

/// User projection returned to clients
///
/// Never carries the password hash; handlers build this from store records
/// with the hash stripped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: ObjectId,
    /// Display name (2-30 chars)
    pub name: String,
    /// Short bio (2-30 chars)
    pub about: String,
    /// Avatar image URL
    pub avatar: String,
    pub email: String,
}

/// Card projection returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: ObjectId,
    /// Card title (2-30 chars)
    pub name: String,
    /// Image URL
    pub link: String,
    /// Identifier of the creating user, immutable after creation
    pub owner: ObjectId,
    /// Users who liked this card; each id appears at most once
    pub likes: Vec<ObjectId>,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /signup`
///
/// Omitted optional fields get the profile defaults applied server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub email: String,
    pub password: String,
}

/// Body of `POST /signin`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

/// Body of `PATCH /users/me`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
}

/// Body of `PATCH /users/me/avatar`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAvatarRequest {
    pub avatar: String,
}

/// Body of `POST /cards`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCardRequest {
    pub name: String,
    pub link: String,
}

/// Generic `{"message": ...}` body
///
/// Used for error responses, signout confirmation, and card deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_optional_fields_default() {
        let body: SignupRequest =
            serde_json::from_str(r#"{"email":"a@b.com","password":"secret"}"#).unwrap();
        assert_eq!(body.email, "a@b.com");
        assert!(body.name.is_none());
        assert!(body.about.is_none());
        assert!(body.avatar.is_none());
    }

    #[test]
    fn test_card_round_trip() {
        let json = r#"{
            "id": "5f1f77bcf86cd799439011aa",
            "name": "Lake Louise",
            "link": "https://example.com/lake.jpg",
            "owner": "5f1f77bcf86cd799439011bb",
            "likes": ["5f1f77bcf86cd799439011cc"],
            "created_at": "2024-01-01T00:00:00Z"
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.name, "Lake Louise");
        assert_eq!(card.likes.len(), 1);

        let back = serde_json::to_string(&card).unwrap();
        let reparsed: Card = serde_json::from_str(&back).unwrap();
        assert_eq!(reparsed.id, card.id);
    }

    #[test]
    fn test_user_has_no_password_field() {
        let user = User {
            id: ObjectId::generate(),
            name: "Jacques-Yves Cousteau".to_string(),
            about: "Explorer".to_string(),
            avatar: "https://example.com/a.png".to_string(),
            email: "jyc@example.com".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
    }
}
