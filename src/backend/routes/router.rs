//! Router
//!
//! Combines the public routes (signup, signin) with the session-gated
//! routes. The auth gate is layered onto the gated subtree only, so it
//! cannot be bypassed by route ordering, and unmatched paths fall through
//! to a JSON 404.
//!
//! # Routes
//!
//! Public:
//! - `POST /signup` - registration
//! - `POST /signin` - login, sets the session cookie
//!
//! Session:
//! - `GET /signout` - clears the session cookie
//! - `GET /users`, `GET /users/me`, `GET /users/{userId}`
//! - `PATCH /users/me`, `PATCH /users/me/avatar`
//! - `GET /cards`, `POST /cards`, `DELETE /cards/{cardId}`
//! - `PUT /cards/{cardId}/likes`, `DELETE /cards/{cardId}/likes`

use axum::routing::{delete, get, patch, post, put};
use axum::{middleware, Router};

use crate::backend::cards::handlers as cards;
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::server::state::AppState;
use crate::backend::users::handlers as users;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/signup", post(users::create_user))
        .route("/signin", post(users::login));

    let session = Router::new()
        .route("/signout", get(users::signout))
        .route("/users", get(users::list_users))
        .route(
            "/users/me",
            get(users::get_me).patch(users::update_profile),
        )
        .route("/users/me/avatar", patch(users::update_avatar))
        .route("/users/{user_id}", get(users::get_user))
        .route("/cards", get(cards::list_cards).post(cards::create_card))
        .route("/cards/{card_id}", delete(cards::delete_card))
        .route(
            "/cards/{card_id}/likes",
            put(cards::like_card).delete(cards::dislike_card),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    public
        .merge(session)
        .fallback(handle_not_found)
        .with_state(state)
}

/// Unmatched routes resolve to the uniform 404 body
async fn handle_not_found() -> ApiError {
    ApiError::not_found("resource not found")
}
