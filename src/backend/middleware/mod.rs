//! Request Middleware
//!
//! The authentication gate protecting session routes.

/// Session-cookie authentication gate
pub mod auth;

pub use auth::{auth_middleware, AuthUser, SESSION_COOKIE};
