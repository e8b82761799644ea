//! Fixed-format record identifiers
//!
//! Tasks and results are keyed by 24-character hexadecimal tokens
//! (12 bytes: a 4-byte timestamp followed by 8 random bytes).

use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use rand::RngCore;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Error;

const ID_BYTES: usize = 12;

/// Opaque 12-byte identifier rendered as lowercase hex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; ID_BYTES]);

impl ObjectId {
    /// Generate a fresh identifier
    pub fn generate() -> Self {
        let mut bytes = [0u8; ID_BYTES];
        // Saturates past 2106 rather than wrapping.
        let seconds = u32::try_from(Utc::now().timestamp()).unwrap_or(u32::MAX);
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        rand::thread_rng().fill_bytes(&mut bytes[4..]);
        Self(bytes)
    }

    /// Parse an identifier, returning `None` for anything that is not
    /// exactly 24 hexadecimal characters.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.len() != ID_BYTES * 2 {
            return None;
        }
        let mut bytes = [0u8; ID_BYTES];
        hex::decode_to_slice(raw, &mut bytes).ok()?;
        Some(Self(bytes))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for ObjectId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| Error::InvalidInput(format!("Malformed id: {}", s)))
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_id() {
        let id = ObjectId::parse("abc000000000000000000002").unwrap();
        assert_eq!(id.to_string(), "abc000000000000000000002");
    }

    #[test]
    fn test_parse_normalizes_case() {
        let id = ObjectId::parse("ABC000000000000000000002").unwrap();
        assert_eq!(id.to_string(), "abc000000000000000000002");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(ObjectId::parse("-abc-").is_none());
        assert!(ObjectId::parse("abc00000000000000000000").is_none());
        assert!(ObjectId::parse("abc0000000000000000000021").is_none());
        assert!(ObjectId::parse("xyz000000000000000000002").is_none());
        assert!(ObjectId::parse("").is_none());
    }

    #[test]
    fn test_generate_is_parseable_and_unique() {
        let a = ObjectId::generate();
        let b = ObjectId::generate();
        assert_ne!(a, b);
        assert_eq!(ObjectId::parse(&a.to_string()), Some(a));
    }

    #[test]
    fn test_generate_leads_with_current_seconds() {
        let before = Utc::now().timestamp();
        let id = ObjectId::generate();
        let after = Utc::now().timestamp();

        let mut seconds = [0u8; 4];
        seconds.copy_from_slice(&id.0[..4]);
        let seconds = i64::from(u32::from_be_bytes(seconds));
        assert!(before <= seconds && seconds <= after);
    }

    #[test]
    fn test_serde_as_string() {
        let id = ObjectId::parse("def000000000000000000004").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"def000000000000000000004\"");

        let back: ObjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        assert!(serde_json::from_str::<ObjectId>("\"-abc-\"").is_err());
    }
}
