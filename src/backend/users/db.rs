//! User Store Queries
//!
//! sqlx queries against the `users` table. Rows come back as
//! [`UserRecord`] (including the password hash); handlers convert to the
//! shared [`User`] projection, which strips the hash, before anything is
//! serialized to a client.

use sqlx::PgPool;

use crate::shared::{ObjectId, User};

/// A user row as stored, password hash included
///
/// Only the login flow and the hash itself ever see this type outside this
/// module; everything client-facing goes through [`User`].
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: ObjectId,
    pub name: String,
    pub about: String,
    pub avatar: String,
    pub email: String,
    pub password_hash: String,
}

impl From<UserRecord> for User {
    /// Projection with the password hash stripped
    fn from(record: UserRecord) -> Self {
        User {
            id: record.id,
            name: record.name,
            about: record.about,
            avatar: record.avatar,
            email: record.email,
        }
    }
}

const USER_COLUMNS: &str = "id, name, about, avatar, email, password_hash";

/// Insert a new user
///
/// Fails with a unique violation on duplicate email, which the error
/// conversion maps to Conflict.
pub async fn insert_user(
    pool: &PgPool,
    id: &ObjectId,
    name: &str,
    about: &str,
    avatar: &str,
    email: &str,
    password_hash: &str,
) -> Result<UserRecord, sqlx::Error> {
    sqlx::query_as::<_, UserRecord>(&format!(
        "INSERT INTO users (id, name, about, avatar, email, password_hash) \
         VALUES ($1, $2, $3, $4, $5, $6) \
         RETURNING {USER_COLUMNS}"
    ))
    .bind(id)
    .bind(name)
    .bind(about)
    .bind(avatar)
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await
}

/// Look up a user by email, hash included (login path)
pub async fn find_user_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<UserRecord>, sqlx::Error> {
    sqlx::query_as::<_, UserRecord>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Look up a user by id
pub async fn find_user_by_id(
    pool: &PgPool,
    id: &ObjectId,
) -> Result<Option<UserRecord>, sqlx::Error> {
    sqlx::query_as::<_, UserRecord>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// List all users
pub async fn list_users(pool: &PgPool) -> Result<Vec<UserRecord>, sqlx::Error> {
    sqlx::query_as::<_, UserRecord>(&format!(
        "SELECT {USER_COLUMNS} FROM users ORDER BY created_at"
    ))
    .fetch_all(pool)
    .await
}

/// Update a user's own name/about; absent fields keep their value
pub async fn update_profile(
    pool: &PgPool,
    id: &ObjectId,
    name: Option<&str>,
    about: Option<&str>,
) -> Result<Option<UserRecord>, sqlx::Error> {
    sqlx::query_as::<_, UserRecord>(&format!(
        "UPDATE users SET name = COALESCE($2, name), about = COALESCE($3, about) \
         WHERE id = $1 \
         RETURNING {USER_COLUMNS}"
    ))
    .bind(id)
    .bind(name)
    .bind(about)
    .fetch_optional(pool)
    .await
}

/// Update a user's own avatar
pub async fn update_avatar(
    pool: &PgPool,
    id: &ObjectId,
    avatar: &str,
) -> Result<Option<UserRecord>, sqlx::Error> {
    sqlx::query_as::<_, UserRecord>(&format!(
        "UPDATE users SET avatar = $2 WHERE id = $1 RETURNING {USER_COLUMNS}"
    ))
    .bind(id)
    .bind(avatar)
    .fetch_optional(pool)
    .await
}
