use std::fmt;

use serde::{Deserialize, Serialize};

/// Request identifier, conventionally formatted `REQ-<n>`.
///
/// Ids are generated from the numeric suffix of the highest existing id,
/// so ordering by [`RequestId::numeric_suffix`] matches creation order as
/// long as every id follows the convention.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(pub String);

impl RequestId {
    pub const PREFIX: &'static str = "REQ-";

    /// Build the canonical id for a numeric suffix.
    pub fn from_number(n: u64) -> Self {
        Self(format!("{}{n}", Self::PREFIX))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digits embedded in the id, concatenated and parsed; 0 when there are
    /// none or the concatenation overflows. Non-standard ids therefore still
    /// produce a usable ordering key.
    pub fn numeric_suffix(&self) -> u64 {
        let digits: String = self.0.chars().filter(char::is_ascii_digit).collect();
        digits.parse().unwrap_or(0)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RequestId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RequestId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_suffix_strips_non_digits() {
        assert_eq!(RequestId::from("REQ-1001").numeric_suffix(), 1001);
        assert_eq!(RequestId::from("case-42-b7").numeric_suffix(), 427);
        assert_eq!(RequestId::from("no-digits").numeric_suffix(), 0);
    }

    #[test]
    fn from_number_round_trips() {
        let id = RequestId::from_number(1234);
        assert_eq!(id.as_str(), "REQ-1234");
        assert_eq!(id.numeric_suffix(), 1234);
    }
}
