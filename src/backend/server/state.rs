//! Application State
//!
//! The central state container handed to the router. Handlers hold no
//! cross-request state of their own; everything durable lives behind the
//! pool, so `AppState` is just the pool plus configuration.
//!
//! The `FromRef` impls let handlers extract only what they need: most take
//! `State<PgPool>`, while login and the auth gate take `State<AppState>`
//! for the signing secret.

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::server::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// Runtime configuration (signing secret, CORS origin)
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(pool: PgPool, config: Config) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }
}

impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for Arc<Config> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
