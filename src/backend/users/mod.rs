//! Users
//!
//! The user resource: signup, login, signout, profile reads and updates.
//! `db` holds the store queries, `handlers` the HTTP handlers.

/// Store queries for the users table
pub mod db;

/// HTTP handlers for user routes
pub mod handlers;

/// Default display name applied when signup omits `name`
pub const DEFAULT_NAME: &str = "Jacques-Yves Cousteau";

/// Default bio applied when signup omits `about`
pub const DEFAULT_ABOUT: &str = "Explorer";

/// Default avatar applied when signup omits `avatar`
pub const DEFAULT_AVATAR: &str =
    "https://pictures.s3.yandex.net/resources/jacques-cousteau_1604399756.png";
