//! Server Configuration
//!
//! All environment-dependent values live in one [`Config`] struct, so the
//! rest of the backend is parameterized by configuration instead of reading
//! the environment at call sites.
//!
//! # Variables
//!
//! - `PORT` - listen port (default 4000)
//! - `DATABASE_URL` - PostgreSQL connection string (required)
//! - `JWT_SECRET` - session token signing secret (required; startup fails
//!   without it rather than falling back to a compiled-in value)
//! - `CORS_ORIGIN` - allowed browser origin (default `http://localhost:3000`)

use axum::http::HeaderValue;
use thiserror::Error;

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Runtime configuration for the server
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port
    pub port: u16,
    /// PostgreSQL connection string
    pub database_url: String,
    /// Session token signing secret
    pub jwt_secret: String,
    /// Origin allowed to make credentialed cross-site requests
    pub cors_origin: HeaderValue,
}

/// Configuration loading failure
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

impl Config {
    /// Load configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;

        let origin = std::env::var("CORS_ORIGIN").unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string());
        let cors_origin = origin
            .parse::<HeaderValue>()
            .map_err(|_| ConfigError::Invalid("CORS_ORIGIN", origin))?;

        Ok(Self {
            port,
            database_url,
            jwt_secret,
            cors_origin,
        })
    }
}
