use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity token payload: the subject plus issue and expiry instants.
///
/// Timestamps are Unix seconds, as RFC 7519 requires.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Claims for `subject` issued at `issued_at` and expiring `validity` later.
    pub fn for_subject(subject: impl ToString, issued_at: DateTime<Utc>, validity: Duration) -> Self {
        Self {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + validity).timestamp(),
        }
    }
}
