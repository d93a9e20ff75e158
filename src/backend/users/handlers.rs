//! User Handlers
//!
//! HTTP handlers for signup, login, signout, and profile operations.
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never serialized
//!   back to callers
//! - Login failures for unknown email and wrong password are
//!   indistinguishable to the caller (same status, same message)
//! - The session is an httpOnly, SameSite=None cookie with a 1-hour expiry

use axum::extract::{Path, State};
use axum::response::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use cookie::time::Duration;
use sqlx::PgPool;

use crate::backend::auth::passwords::{hash_password, verify_password};
use crate::backend::auth::sessions::{create_token, SESSION_TTL_SECS};
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::{AuthUser, SESSION_COOKIE};
use crate::backend::server::state::AppState;
use crate::backend::users::db;
use crate::backend::users::{DEFAULT_ABOUT, DEFAULT_AVATAR, DEFAULT_NAME};
use crate::backend::validation::{validate_email, validate_password, validate_text, validate_url};
use crate::shared::{
    MessageResponse, ObjectId, SigninRequest, SignupRequest, UpdateAvatarRequest,
    UpdateProfileRequest, User,
};

/// Build the session cookie carrying a freshly issued token
fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .max_age(Duration::seconds(SESSION_TTL_SECS as i64))
        .build()
}

/// `POST /signup` - register a new user
///
/// Omitted optional fields get the profile defaults. Errors: 400 on
/// validation failure, 409 on duplicate email.
pub async fn create_user(
    State(pool): State<PgPool>,
    Json(body): Json<SignupRequest>,
) -> Result<Json<User>, ApiError> {
    let name = body.name.as_deref().unwrap_or(DEFAULT_NAME);
    let about = body.about.as_deref().unwrap_or(DEFAULT_ABOUT);
    let avatar = body.avatar.as_deref().unwrap_or(DEFAULT_AVATAR);

    validate_text("name", name)?;
    validate_text("about", about)?;
    validate_url("avatar", avatar)?;
    validate_email(&body.email)?;
    validate_password(&body.password)?;

    let password_hash = hash_password(&body.password)?;
    let id = ObjectId::generate();

    let record =
        db::insert_user(&pool, &id, name, about, avatar, &body.email, &password_hash).await?;

    tracing::info!("user created: {}", record.id);
    Ok(Json(record.into()))
}

/// `POST /signin` - authenticate and set the session cookie
///
/// Unknown email and wrong password produce the same 401 so callers
/// cannot enumerate accounts.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<SigninRequest>,
) -> Result<(CookieJar, Json<User>), ApiError> {
    let invalid_credentials = || ApiError::unauthorized("incorrect email or password");

    let record = db::find_user_by_email(&state.pool, &body.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("login attempt for unknown email");
            invalid_credentials()
        })?;

    if !verify_password(&body.password, &record.password_hash)? {
        tracing::warn!("wrong password for user {}", record.id);
        return Err(invalid_credentials());
    }

    let token = create_token(&record.id, &state.config.jwt_secret).map_err(|e| {
        tracing::error!("failed to issue session token: {e}");
        ApiError::Internal
    })?;

    tracing::info!("user logged in: {}", record.id);
    Ok((jar.add(session_cookie(token)), Json(record.into())))
}

/// `GET /signout` - clear the session cookie
pub async fn signout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let removal = Cookie::build(SESSION_COOKIE).path("/").build();
    (
        jar.remove(removal),
        Json(MessageResponse {
            message: "signed out".to_string(),
        }),
    )
}

/// `GET /users` - list all users
pub async fn list_users(
    State(pool): State<PgPool>,
    _user: AuthUser,
) -> Result<Json<Vec<User>>, ApiError> {
    let records = db::list_users(&pool).await?;
    Ok(Json(records.into_iter().map(User::from).collect()))
}

/// `GET /users/me` - the authenticated subject's own record
pub async fn get_me(
    State(pool): State<PgPool>,
    AuthUser(subject): AuthUser,
) -> Result<Json<User>, ApiError> {
    let record = db::find_user_by_id(&pool, &subject)
        .await?
        .ok_or_else(|| ApiError::not_found("user not found"))?;
    Ok(Json(record.into()))
}

/// `GET /users/{userId}` - one user by path id
///
/// 400 if the id is not a validly shaped identifier, 404 if absent.
pub async fn get_user(
    State(pool): State<PgPool>,
    _user: AuthUser,
    Path(user_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id: ObjectId = user_id
        .parse()
        .map_err(|_| ApiError::bad_request("invalid user id"))?;

    let record = db::find_user_by_id(&pool, &id)
        .await?
        .ok_or_else(|| ApiError::not_found("user not found"))?;
    Ok(Json(record.into()))
}

/// `PATCH /users/me` - update own name/about
pub async fn update_profile(
    State(pool): State<PgPool>,
    AuthUser(subject): AuthUser,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<User>, ApiError> {
    if let Some(name) = &body.name {
        validate_text("name", name)?;
    }
    if let Some(about) = &body.about {
        validate_text("about", about)?;
    }

    let record = db::update_profile(&pool, &subject, body.name.as_deref(), body.about.as_deref())
        .await?
        .ok_or_else(|| ApiError::not_found("user not found"))?;

    tracing::info!("profile updated: {}", record.id);
    Ok(Json(record.into()))
}

/// `PATCH /users/me/avatar` - update own avatar
pub async fn update_avatar(
    State(pool): State<PgPool>,
    AuthUser(subject): AuthUser,
    Json(body): Json<UpdateAvatarRequest>,
) -> Result<Json<User>, ApiError> {
    validate_url("avatar", &body.avatar)?;

    let record = db::update_avatar(&pool, &subject, &body.avatar)
        .await?
        .ok_or_else(|| ApiError::not_found("user not found"))?;

    tracing::info!("avatar updated: {}", record.id);
    Ok(Json(record.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("token-value".to_string());
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "token-value");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(3600)));
        assert_eq!(cookie.path(), Some("/"));
    }
}
