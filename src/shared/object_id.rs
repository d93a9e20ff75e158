//! Store Identifiers
//!
//! User and card records are keyed by an opaque 24-character lowercase hex
//! identifier assigned by the application at insert time: a 4-byte unix
//! timestamp followed by 8 random bytes. Parsing is strict so that malformed
//! path parameters can be rejected before any store access.

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Length of the hex representation (12 bytes encoded)
const OBJECT_ID_LEN: usize = 24;

/// Opaque store identifier for users and cards
///
/// Serialized as a plain JSON string; stored as TEXT. Deserialization
/// validates the 24-hex shape, so an `ObjectId` held anywhere in the
/// program is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(try_from = "String", into = "String")]
#[sqlx(transparent)]
pub struct ObjectId(String);

/// Error returned when a string is not a valid identifier
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid object id: expected 24 hex characters")]
pub struct ParseObjectIdError;

impl ObjectId {
    /// Generate a fresh identifier
    ///
    /// The leading 4 bytes are the current unix time, the remaining 8 are
    /// random. Collisions within one second require a 64-bit random clash.
    pub fn generate() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as u32)
            .unwrap_or_default();

        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&secs.to_be_bytes());
        rand::thread_rng().fill(&mut bytes[4..]);

        Self(hex::encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ObjectId {
    type Err = ParseObjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != OBJECT_ID_LEN || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseObjectIdError);
        }
        Ok(Self(s.to_ascii_lowercase()))
    }
}

impl TryFrom<String> for ObjectId {
    type Error = ParseObjectIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ObjectId> for String {
    fn from(id: ObjectId) -> Self {
        id.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_valid() {
        let id = ObjectId::generate();
        assert_eq!(id.as_str().len(), 24);
        assert!(id.as_str().bytes().all(|b| b.is_ascii_hexdigit()));
        // Round-trips through its own parser
        assert_eq!(id.as_str().parse::<ObjectId>().unwrap(), id);
    }

    #[test]
    fn test_generate_is_unique() {
        let a = ObjectId::generate();
        let b = ObjectId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_parse_valid() {
        let id: ObjectId = "5f1f77bcf86cd799439011aa".parse().unwrap();
        assert_eq!(id.as_str(), "5f1f77bcf86cd799439011aa");
    }

    #[test]
    fn test_parse_normalizes_case() {
        let id: ObjectId = "5F1F77BCF86CD799439011AA".parse().unwrap();
        assert_eq!(id.as_str(), "5f1f77bcf86cd799439011aa");
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!("abc".parse::<ObjectId>(), Err(ParseObjectIdError));
        assert_eq!(
            "5f1f77bcf86cd799439011aaff".parse::<ObjectId>(),
            Err(ParseObjectIdError)
        );
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        assert_eq!(
            "xyz977bcf86cd799439011aa".parse::<ObjectId>(),
            Err(ParseObjectIdError)
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let id = ObjectId::generate();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_str()));
        let back: ObjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_serde_rejects_malformed() {
        let result = serde_json::from_str::<ObjectId>("\"not-an-id\"");
        assert!(result.is_err());
    }
}
