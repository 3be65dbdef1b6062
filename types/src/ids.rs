//! Identity and calendar keys.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("day key must be YYYY-MM-DD (got {0:?})")]
pub struct DayKeyError(pub String);

/// A calendar-day key in `YYYY-MM-DD` form.
///
/// This is the persistence key for daily draws and one of the seed inputs,
/// so its shape is validated at construction rather than at every use.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayKey(String);

impl DayKey {
    pub fn new(value: impl Into<String>) -> Result<Self, DayKeyError> {
        let value = value.into();
        let bytes = value.as_bytes();
        let shape_ok = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit());
        if shape_ok {
            Ok(Self(value))
        } else {
            Err(DayKeyError(value))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DayKey {
    type Error = DayKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayKey> for String {
    fn from(value: DayKey) -> Self {
        value.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error)]
#[error("identity token must not be empty")]
pub struct IdentityTokenError;

/// A store-once opaque installation identity.
///
/// Generated once per installation, persisted independently of daily keys,
/// and fed into every seed derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IdentityToken(String);

impl IdentityToken {
    pub fn new(value: impl Into<String>) -> Result<Self, IdentityTokenError> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(IdentityTokenError)
        } else {
            Ok(Self(value))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for IdentityToken {
    type Error = IdentityTokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<IdentityToken> for String {
    fn from(value: IdentityToken) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::{DayKey, IdentityToken};

    #[test]
    fn day_key_accepts_iso_dates() {
        assert!(DayKey::new("2024-01-01").is_ok());
        assert!(DayKey::new("1999-12-31").is_ok());
    }

    #[test]
    fn day_key_rejects_malformed_input() {
        for bad in ["2024-1-01", "2024/01/01", "20240101", "2024-01-01T00", ""] {
            assert!(DayKey::new(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn day_key_serde_is_transparent() {
        let key = DayKey::new("2024-06-15").expect("valid");
        let json = serde_json::to_string(&key).expect("serialize");
        assert_eq!(json, "\"2024-06-15\"");
        let back: DayKey = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, key);
    }

    #[test]
    fn identity_token_rejects_blank() {
        assert!(IdentityToken::new("").is_err());
        assert!(IdentityToken::new("   ").is_err());
        assert!(IdentityToken::new("abc123_999").is_ok());
    }
}
