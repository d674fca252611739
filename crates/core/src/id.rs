//! Strongly-typed identifiers.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Identifier of a catalog entry.
///
/// Assigned by the server on create; the client never mutates it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(i64);

impl EntryId {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for EntryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for EntryId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for EntryId {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .parse::<i64>()
            .map_err(|e| ApiError::validation(format!("invalid entry id '{s}': {e}")))?;
        Ok(Self(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_from_str() {
        let id: EntryId = "42".parse().unwrap();
        assert_eq!(id, EntryId::new(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn rejects_non_numeric() {
        let err = "abc".parse::<EntryId>().unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
