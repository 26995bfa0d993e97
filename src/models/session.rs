use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Persisted form of a session: `{ "username": ..., "expiresAt": <epoch ms> }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub username: String,
    #[serde(rename = "expiresAt")]
    pub expires_at: i64,
}

/// An authenticated session held on the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(username: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            username: username.into(),
            expires_at,
        }
    }

    /// Valid strictly before the expiry instant.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    pub fn to_stored(&self) -> StoredSession {
        StoredSession {
            username: self.username.clone(),
            expires_at: self.expires_at.timestamp_millis(),
        }
    }

    /// `None` when the stored timestamp is out of chrono's range.
    pub fn from_stored(stored: &StoredSession) -> Option<Self> {
        let expires_at = Utc.timestamp_millis_opt(stored.expires_at).single()?;
        Some(Self::new(stored.username.clone(), expires_at))
    }
}
