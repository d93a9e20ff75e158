//! Cards
//!
//! The card resource: image posts with an owner and a set of likes.
//! `db` holds the store queries, `handlers` the HTTP handlers.

/// Store queries for cards and likes
pub mod db;

/// HTTP handlers for card routes
pub mod handlers;
