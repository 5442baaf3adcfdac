//! Opaque record identifiers.
//!
//! References between records (order → customer, todo → user, ...) are never
//! embedded; they carry the 24-character hexadecimal object id the external
//! document store assigns. Ids are canonicalized to lowercase on parse.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Number of bytes in an object id.
pub const RECORD_ID_BYTES: usize = 12;

/// JSON Schema pattern accepted for ids on the wire.
pub const RECORD_ID_PATTERN: &str = "^[0-9a-fA-F]{24}$";

/// Identifier of a record owned by the external store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Parse and canonicalize an id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidId` unless `raw` is exactly 24 hex digits.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        if raw.len() == RECORD_ID_BYTES * 2 && raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            Ok(Self(raw.to_ascii_lowercase()))
        } else {
            Err(CoreError::InvalidId(raw.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RecordId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RecordId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl JsonSchema for RecordId {
    fn inline_schema() -> bool {
        true
    }

    fn schema_name() -> Cow<'static, str> {
        "RecordId".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "pattern": RECORD_ID_PATTERN,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_canonicalizes_to_lowercase() {
        let id = RecordId::parse("65A1B2C3D4E5F60718293A4B").unwrap();
        assert_eq!(id.as_str(), "65a1b2c3d4e5f60718293a4b");
    }

    #[test]
    fn parse_rejects_wrong_length_and_non_hex() {
        assert!(RecordId::parse("").is_err());
        assert!(RecordId::parse("65a1b2c3").is_err());
        assert!(RecordId::parse("zz a1b2c3d4e5f60718293a4").is_err());
        assert!(RecordId::parse("65a1b2c3d4e5f60718293a4b00").is_err());
    }

    #[test]
    fn deserialize_goes_through_parse() {
        let id: RecordId = serde_json::from_str("\"65A1B2C3D4E5F60718293A4B\"").unwrap();
        assert_eq!(id.to_string(), "65a1b2c3d4e5f60718293a4b");
        assert!(serde_json::from_str::<RecordId>("\"nope\"").is_err());
    }

    #[test]
    fn schema_is_inline_string_pattern() {
        let schema = serde_json::to_value(schemars::schema_for!(RecordId)).unwrap();
        assert_eq!(schema["type"], "string");
        assert_eq!(schema["pattern"], RECORD_ID_PATTERN);
    }
}
