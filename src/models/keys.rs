//! Scope identities supplied by the host at render time.
//!
//! The host addresses every checkpoint render with three identifiers: the
//! current user, the enclosing course, and this checkpoint instance. All
//! three are opaque to the widget; newtypes keep them from being swapped at
//! call sites.

use serde::{Deserialize, Deserializer, Serialize};

/// Course id used when the host supplies none (workbench/harness contexts).
pub const DEFAULT_COURSE_ID: &str = "edX/Enchantment_101/April_1";

/// Identity of the student the render is for.
///
/// Hosts encode user ids as either JSON numbers or strings; both forms
/// deserialize to the same canonical string value.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => UserId(n.to_string()),
            Raw::Text(s) => UserId(s),
        })
    }
}

/// Identity of the course this checkpoint is placed in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CourseId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Default for CourseId {
    fn default() -> Self {
        Self(DEFAULT_COURSE_ID.to_string())
    }
}

/// Identity of this checkpoint instance within the course structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct UsageId(String);

impl UsageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UsageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UsageId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_deserializes_from_number_or_string() {
        let from_number: UserId = serde_json::from_str("5").unwrap();
        let from_string: UserId = serde_json::from_str("\"5\"").unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_number, UserId::from(5));
    }

    #[test]
    fn test_course_id_default_is_harness_fallback() {
        assert_eq!(CourseId::default().as_str(), DEFAULT_COURSE_ID);
    }
}
