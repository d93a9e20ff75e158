//! Client SDK
//!
//! A thin HTTP client over the Mesto API: one async method per endpoint,
//! nothing else. The underlying reqwest client keeps a cookie store, so the
//! session cookie set by [`signin`](MestoClient::signin) is attached to
//! every later request automatically.
//!
//! Construct one configured [`MestoClient`] at startup and pass it to
//! consumers; there is no global instance.
//!
//! No retries, no caching, no request deduplication: a non-2xx status
//! becomes [`ClientError::Api`], a transport failure [`ClientError::Http`].

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::shared::{
    Card, CreateCardRequest, MessageResponse, ObjectId, SigninRequest, SignupRequest,
    UpdateAvatarRequest, UpdateProfileRequest, User,
};

/// Client-side error
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-success status
    #[error("request failed with status {status}: {message}")]
    Api {
        status: StatusCode,
        /// Server-provided message when the error body parsed, otherwise
        /// the status line
        message: String,
    },

    /// The request never produced a response
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Configured Mesto API client
#[derive(Debug, Clone)]
pub struct MestoClient {
    http: reqwest::Client,
    base_url: String,
}

impl MestoClient {
    /// Build a client for the given API base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Translate a response: 2xx parses the body, anything else rejects
    async fn check<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<MessageResponse>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| status.to_string());
            return Err(ClientError::Api { status, message });
        }
        Ok(response.json().await?)
    }

    /// `POST /signup`
    pub async fn signup(&self, request: &SignupRequest) -> Result<User, ClientError> {
        let response = self.http.post(self.url("/signup")).json(request).send().await?;
        Self::check(response).await
    }

    /// `POST /signin` - on success the session cookie lands in the store
    pub async fn signin(&self, email: &str, password: &str) -> Result<User, ClientError> {
        let request = SigninRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self.http.post(self.url("/signin")).json(&request).send().await?;
        Self::check(response).await
    }

    /// `GET /signout`
    pub async fn signout(&self) -> Result<MessageResponse, ClientError> {
        let response = self.http.get(self.url("/signout")).send().await?;
        Self::check(response).await
    }

    /// `GET /users`
    pub async fn get_users(&self) -> Result<Vec<User>, ClientError> {
        let response = self.http.get(self.url("/users")).send().await?;
        Self::check(response).await
    }

    /// `GET /users/me`
    pub async fn get_me(&self) -> Result<User, ClientError> {
        let response = self.http.get(self.url("/users/me")).send().await?;
        Self::check(response).await
    }

    /// `GET /users/{userId}`
    pub async fn get_user(&self, id: &ObjectId) -> Result<User, ClientError> {
        let response = self.http.get(self.url(&format!("/users/{id}"))).send().await?;
        Self::check(response).await
    }

    /// `PATCH /users/me`
    pub async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> Result<User, ClientError> {
        let response = self
            .http
            .patch(self.url("/users/me"))
            .json(request)
            .send()
            .await?;
        Self::check(response).await
    }

    /// `PATCH /users/me/avatar`
    pub async fn update_avatar(&self, avatar: &str) -> Result<User, ClientError> {
        let request = UpdateAvatarRequest {
            avatar: avatar.to_string(),
        };
        let response = self
            .http
            .patch(self.url("/users/me/avatar"))
            .json(&request)
            .send()
            .await?;
        Self::check(response).await
    }

    /// `GET /cards`
    pub async fn get_cards(&self) -> Result<Vec<Card>, ClientError> {
        let response = self.http.get(self.url("/cards")).send().await?;
        Self::check(response).await
    }

    /// `POST /cards`
    pub async fn add_card(&self, name: &str, link: &str) -> Result<Card, ClientError> {
        let request = CreateCardRequest {
            name: name.to_string(),
            link: link.to_string(),
        };
        let response = self.http.post(self.url("/cards")).json(&request).send().await?;
        Self::check(response).await
    }

    /// `DELETE /cards/{cardId}`
    pub async fn delete_card(&self, id: &ObjectId) -> Result<MessageResponse, ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/cards/{id}")))
            .send()
            .await?;
        Self::check(response).await
    }

    /// `PUT /cards/{cardId}/likes`
    pub async fn like_card(&self, id: &ObjectId) -> Result<Card, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/cards/{id}/likes")))
            .send()
            .await?;
        Self::check(response).await
    }

    /// `DELETE /cards/{cardId}/likes`
    pub async fn dislike_card(&self, id: &ObjectId) -> Result<Card, ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/cards/{id}/likes")))
            .send()
            .await?;
        Self::check(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = MestoClient::new("http://localhost:4000/").unwrap();
        assert_eq!(client.url("/cards"), "http://localhost:4000/cards");
    }

    #[test]
    fn test_url_building() {
        let client = MestoClient::new("http://localhost:4000").unwrap();
        let id: ObjectId = "5f1f77bcf86cd799439011aa".parse().unwrap();
        assert_eq!(
            client.url(&format!("/cards/{id}/likes")),
            "http://localhost:4000/cards/5f1f77bcf86cd799439011aa/likes"
        );
    }
}
