//! Card Handlers
//!
//! HTTP handlers for listing, creating, deleting, and liking cards.
//!
//! Deletion checks ownership against a read-only lookup before issuing the
//! destructive statement; a non-owner request leaves the card untouched.

use axum::extract::{Path, State};
use axum::response::Json;
use sqlx::PgPool;

use crate::backend::cards::db;
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::validation::{validate_text, validate_url};
use crate::shared::{Card, CreateCardRequest, MessageResponse, ObjectId};

fn parse_card_id(raw: &str) -> Result<ObjectId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("invalid card id"))
}

/// `GET /cards` - list all cards
pub async fn list_cards(
    State(pool): State<PgPool>,
    _user: AuthUser,
) -> Result<Json<Vec<Card>>, ApiError> {
    let records = db::list_cards(&pool).await?;
    Ok(Json(records.into_iter().map(Card::from).collect()))
}

/// `POST /cards` - create a card owned by the authenticated subject
pub async fn create_card(
    State(pool): State<PgPool>,
    AuthUser(owner): AuthUser,
    Json(body): Json<CreateCardRequest>,
) -> Result<Json<Card>, ApiError> {
    validate_text("name", &body.name)?;
    validate_url("link", &body.link)?;

    let id = ObjectId::generate();
    let record = db::insert_card(&pool, &id, &body.name, &body.link, &owner).await?;

    tracing::info!("card created: {} by {}", record.id, owner);
    Ok(Json(record.into()))
}

/// `DELETE /cards/{cardId}` - remove an owned card
///
/// Ownership is checked before any mutation: 404 if the card is absent,
/// 403 if the requester is not the owner.
pub async fn delete_card(
    State(pool): State<PgPool>,
    AuthUser(requester): AuthUser,
    Path(card_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_card_id(&card_id)?;

    let owner = db::card_owner(&pool, &id)
        .await?
        .ok_or_else(|| ApiError::not_found("card not found"))?;

    if owner != requester {
        tracing::warn!("user {} tried to delete card {} owned by {}", requester, id, owner);
        return Err(ApiError::forbidden("you can only delete your own cards"));
    }

    // The statement re-checks ownership, so a concurrent delete or owner
    // change cannot slip through between the lookup and the mutation
    let removed = db::delete_card(&pool, &id, &requester).await?;
    if removed == 0 {
        return Err(ApiError::not_found("card not found"));
    }

    tracing::info!("card deleted: {id}");
    Ok(Json(MessageResponse {
        message: "card deleted".to_string(),
    }))
}

/// `PUT /cards/{cardId}/likes` - add the subject to the likes set
///
/// Idempotent: liking an already-liked card changes nothing.
pub async fn like_card(
    State(pool): State<PgPool>,
    AuthUser(subject): AuthUser,
    Path(card_id): Path<String>,
) -> Result<Json<Card>, ApiError> {
    let id = parse_card_id(&card_id)?;

    if db::card_owner(&pool, &id).await?.is_none() {
        return Err(ApiError::not_found("card not found"));
    }
    db::add_like(&pool, &id, &subject).await?;

    let record = db::find_card(&pool, &id)
        .await?
        .ok_or_else(|| ApiError::not_found("card not found"))?;
    Ok(Json(record.into()))
}

/// `DELETE /cards/{cardId}/likes` - remove the subject from the likes set
///
/// Idempotent: disliking a card the subject never liked changes nothing.
pub async fn dislike_card(
    State(pool): State<PgPool>,
    AuthUser(subject): AuthUser,
    Path(card_id): Path<String>,
) -> Result<Json<Card>, ApiError> {
    let id = parse_card_id(&card_id)?;

    if db::card_owner(&pool, &id).await?.is_none() {
        return Err(ApiError::not_found("card not found"));
    }
    db::remove_like(&pool, &id, &subject).await?;

    let record = db::find_card(&pool, &id)
        .await?
        .ok_or_else(|| ApiError::not_found("card not found"))?;
    Ok(Json(record.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_card_id() {
        assert!(parse_card_id("5f1f77bcf86cd799439011aa").is_ok());
        assert!(matches!(
            parse_card_id("xyz"),
            Err(ApiError::BadRequest(_))
        ));
    }
}
