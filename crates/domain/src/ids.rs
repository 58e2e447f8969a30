use std::fmt;

use serde::{Deserialize, Serialize};

/// Catalog key of a lottery type (e.g. `DOUBLE_COLOR_BALL`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LotteryTypeId(String);

impl LotteryTypeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for LotteryTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LotteryTypeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for LotteryTypeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for LotteryTypeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LotteryTypeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LotteryTypeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_compare() {
        let id = LotteryTypeId::new("SUPER_LOTTO");
        assert_eq!(id.to_string(), "SUPER_LOTTO");
        assert_eq!(id, "SUPER_LOTTO");
        assert_eq!(id.as_str(), "SUPER_LOTTO");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = LotteryTypeId::from("DOUBLE_COLOR_BALL");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"DOUBLE_COLOR_BALL\"");
    }
}
