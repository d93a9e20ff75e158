//! Mesto - Photo Sharing Service
//!
//! Mesto is a small photo-sharing application: users sign up, edit their
//! profile, and post "cards" (image links) that other users can like.
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Types shared between the server and the client SDK
//!   - The `ObjectId` store identifier
//!   - User and card projections, request bodies
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server with session-cookie authentication
//!   - bcrypt password hashing and JWT session tokens
//!   - PostgreSQL persistence via sqlx
//!
//! - **`client`** - HTTP client SDK
//!   - One async method per backend endpoint
//!   - Automatic session-cookie handling via reqwest
//!
//! # Usage
//!
//! ```rust,no_run
//! use mesto::backend::server::config::Config;
//! use mesto::backend::server::init::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let app = create_app(config).await?;
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```

/// Types shared between the server and the client SDK
pub mod shared;

/// Backend server-side code
pub mod backend;

/// HTTP client SDK
pub mod client;
