//! Backend Error Types
//!
//! The uniform error taxonomy of the HTTP surface. Every handler failure is
//! an [`ApiError`]; the `IntoResponse` impl in [`conversion`] renders it as
//! a `{"message": ...}` JSON body with the mapped status code.

/// Error enum and status mapping
pub mod types;

/// HTTP response conversion
pub mod conversion;

pub use types::ApiError;
