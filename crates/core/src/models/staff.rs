use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;

/// Identifier of a staff member.
///
/// The backend sends numeric ids, sometimes encoded as strings. Both forms
/// deserialize to the same value, so `7` and `"7"` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StaffId(String);

impl StaffId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StaffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StaffId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for StaffId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl From<i64> for StaffId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for StaffId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Number(id) => Ok(StaffId::from(id)),
            RawId::Text(id) if id.trim().is_empty() => {
                Err(de::Error::custom("staff id must not be empty"))
            }
            RawId::Text(id) => Ok(StaffId::new(id)),
        }
    }
}
