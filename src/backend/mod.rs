//! Backend Module
//!
//! Server-side code for the Mesto photo-sharing service: an Axum HTTP server
//! backed by PostgreSQL, with bcrypt password hashing and a JWT session
//! cookie.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Router assembly (public vs session-gated routes)
//! - **`auth`** - Password hashing and session tokens
//! - **`middleware`** - The authentication gate
//! - **`users`** / **`cards`** - Per-resource store queries and handlers
//! - **`error`** - The HTTP error taxonomy
//! - **`validation`** - Field validation shared by handlers
//!
//! # Request Flow
//!
//! Trace layer -> CORS -> (auth gate for session routes) -> handler ->
//! store query -> `ApiError`-mapped response. Every handler failure is one
//! of the `ApiError` variants; nothing internal leaks to clients.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Password hashing and session tokens
pub mod auth;

/// Request middleware
pub mod middleware;

/// User store queries and handlers
pub mod users;

/// Card store queries and handlers
pub mod cards;

/// Backend error types
pub mod error;

/// Field validation helpers
pub mod validation;

pub use error::ApiError;
pub use server::state::AppState;
