//! Shared Types
//!
//! Types used by both the backend handlers and the client SDK: the store
//! identifier and the JSON request/response shapes of the HTTP surface.

/// Store-assigned 24-character hex identifier
pub mod object_id;

/// Request and response bodies
pub mod types;

pub use object_id::{ObjectId, ParseObjectIdError};
pub use types::{
    Card, CreateCardRequest, MessageResponse, SigninRequest, SignupRequest,
    UpdateAvatarRequest, UpdateProfileRequest, User,
};
