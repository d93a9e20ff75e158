//! Card Store Queries
//!
//! sqlx queries against `cards` and `card_likes`. Likes live in a join
//! table whose (card, user) primary key enforces set semantics; projections
//! aggregate them with `array_agg`. Like and dislike are single-statement
//! operations, so two concurrent likes from different users both land
//! without coordination.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::shared::{Card, ObjectId};

/// A card row with its likes aggregated
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CardRecord {
    pub id: ObjectId,
    pub name: String,
    pub link: String,
    pub owner: ObjectId,
    pub likes: Vec<ObjectId>,
    pub created_at: DateTime<Utc>,
}

impl From<CardRecord> for Card {
    fn from(record: CardRecord) -> Self {
        Card {
            id: record.id,
            name: record.name,
            link: record.link,
            owner: record.owner,
            likes: record.likes,
            created_at: record.created_at,
        }
    }
}

const CARD_SELECT: &str = "SELECT c.id, c.name, c.link, c.owner, c.created_at, \
       COALESCE(array_agg(l.user_id) FILTER (WHERE l.user_id IS NOT NULL), '{}') AS likes \
  FROM cards c LEFT JOIN card_likes l ON l.card_id = c.id";

/// List all cards, newest first
pub async fn list_cards(pool: &PgPool) -> Result<Vec<CardRecord>, sqlx::Error> {
    sqlx::query_as::<_, CardRecord>(&format!(
        "{CARD_SELECT} GROUP BY c.id ORDER BY c.created_at DESC"
    ))
    .fetch_all(pool)
    .await
}

/// Fetch one card with its likes
pub async fn find_card(pool: &PgPool, id: &ObjectId) -> Result<Option<CardRecord>, sqlx::Error> {
    sqlx::query_as::<_, CardRecord>(&format!("{CARD_SELECT} WHERE c.id = $1 GROUP BY c.id"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Fetch only a card's owner (read-only authorization lookup)
pub async fn card_owner(pool: &PgPool, id: &ObjectId) -> Result<Option<ObjectId>, sqlx::Error> {
    sqlx::query_scalar::<_, ObjectId>("SELECT owner FROM cards WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert a new card; the fresh card has no likes
pub async fn insert_card(
    pool: &PgPool,
    id: &ObjectId,
    name: &str,
    link: &str,
    owner: &ObjectId,
) -> Result<CardRecord, sqlx::Error> {
    sqlx::query_as::<_, CardRecord>(
        "INSERT INTO cards (id, name, link, owner) VALUES ($1, $2, $3, $4) \
         RETURNING id, name, link, owner, created_at, '{}'::text[] AS likes",
    )
    .bind(id)
    .bind(name)
    .bind(link)
    .bind(owner)
    .fetch_one(pool)
    .await
}

/// Delete a card, but only if `owner` still owns it (likes cascade)
///
/// The owner predicate is part of the statement, so the authorization
/// decision and the mutation are one atomic operation. Returns the number
/// of rows removed: 0 means the card vanished or changed hands since the
/// caller's lookup.
pub async fn delete_card(
    pool: &PgPool,
    id: &ObjectId,
    owner: &ObjectId,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM cards WHERE id = $1 AND owner = $2")
        .bind(id)
        .bind(owner)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Add a user to a card's likes set; idempotent
pub async fn add_like(
    pool: &PgPool,
    card_id: &ObjectId,
    user_id: &ObjectId,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO card_likes (card_id, user_id) VALUES ($1, $2) ON CONFLICT DO NOTHING")
        .bind(card_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Remove a user from a card's likes set; idempotent
pub async fn remove_like(
    pool: &PgPool,
    card_id: &ObjectId,
    user_id: &ObjectId,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM card_likes WHERE card_id = $1 AND user_id = $2")
        .bind(card_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}
