//! API Key entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of an API key
///
/// Only `Active` is ever produced; the enum keeps the wire value typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ApiKeyStatus {
    /// Key is active and can be used
    #[default]
    Active,
}

impl std::fmt::Display for ApiKeyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
        }
    }
}

/// API Key entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    /// Opaque random token, unique within the store
    key: String,
    /// Creation or last regeneration timestamp
    #[serde(with = "rfc3339_millis")]
    created_at: DateTime<Utc>,
    /// Current status of the key
    status: ApiKeyStatus,
}

impl ApiKey {
    /// Create a new active API key stamped with the current time
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            created_at: Utc::now(),
            status: ApiKeyStatus::Active,
        }
    }

    /// Set the creation timestamp
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    // Getters

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn status(&self) -> ApiKeyStatus {
        self.status
    }

    /// First eight characters of the token, safe to log
    pub fn key_prefix(&self) -> &str {
        token_prefix(&self.key)
    }

    // State transitions

    /// Replace the token in place, resetting timestamp and status
    pub fn regenerate(&mut self, new_key: impl Into<String>) {
        self.key = new_key.into();
        self.created_at = Utc::now();
        self.status = ApiKeyStatus::Active;
    }
}

/// Leading eight characters of a token, cut on a character boundary
pub fn token_prefix(token: &str) -> &str {
    token
        .char_indices()
        .nth(8)
        .map(|(i, _)| &token[..i])
        .unwrap_or(token)
}

/// Timestamps as RFC 3339 UTC with millisecond precision (`2024-05-01T12:00:00.000Z`)
mod rfc3339_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
