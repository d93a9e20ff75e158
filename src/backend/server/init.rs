//! Server Initialization
//!
//! Builds the application: connects the pool, runs migrations, and stacks
//! the middleware layers around the router.
//!
//! # Layer Order
//!
//! Trace (request logging) wraps CORS, which wraps the routes; the auth
//! gate is applied inside the router to session routes only.

use axum::http::header::CONTENT_TYPE;
use axum::http::Method;
use axum::Router;
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::backend::routes::create_router;
use crate::backend::server::config::Config;
use crate::backend::server::state::AppState;

/// Connect to the store, run migrations, and build the application
pub async fn create_app(config: Config) -> Result<Router, sqlx::Error> {
    tracing::info!("connecting to database");
    let pool = PgPool::connect(&config.database_url).await?;

    tracing::info!("running migrations");
    sqlx::migrate!().run(&pool).await?;

    Ok(build_app(AppState::new(pool, config)))
}

/// Assemble the router and middleware layers around existing state
///
/// Split from [`create_app`] so tests can build the application without a
/// live database connection.
pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(state.config.cors_origin.clone())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::PUT,
            Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
