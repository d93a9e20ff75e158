//! Server Setup
//!
//! Configuration loading, shared application state, and server
//! initialization (pool, migrations, middleware layers, router).

/// Environment-derived configuration
pub mod config;

/// Application state and `FromRef` extraction
pub mod state;

/// Application assembly
pub mod init;

pub use config::Config;
pub use init::create_app;
pub use state::AppState;
