//! Authentication
//!
//! Cryptographic building blocks of the auth flow: bcrypt password hashing
//! and JWT session tokens. Neither submodule touches the store; handlers
//! and the auth gate compose them with store lookups.

/// bcrypt password hashing and verification
pub mod passwords;

/// JWT session token issue and verification
pub mod sessions;

pub use passwords::{hash_password, verify_password};
pub use sessions::{create_token, verify_token, SESSION_TTL_SECS};
