//! Verification attempt entity for one-time code delivery.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default time-to-live for an issued code (5 minutes)
pub const CODE_TTL_SECONDS: i64 = 300;

/// Delivery channel for a verification code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Sms,
    Whatsapp,
    ChatApp,
    Email,
}

impl Channel {
    /// Stable string form used in storage and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Sms => "sms",
            Channel::Whatsapp => "whatsapp",
            Channel::ChatApp => "chat_app",
            Channel::Email => "email",
        }
    }

    /// Whether the channel delivers to a phone number
    pub fn is_phone(&self) -> bool {
        matches!(self, Channel::Sms | Channel::Whatsapp | Channel::ChatApp)
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sms" => Ok(Channel::Sms),
            "whatsapp" => Ok(Channel::Whatsapp),
            "chat_app" | "chat-app" => Ok(Channel::ChatApp),
            "email" => Ok(Channel::Email),
            _ => Err(format!("Unknown channel: {}", s)),
        }
    }
}

/// A single in-flight verification attempt, keyed by canonical address
///
/// At most one live attempt exists per address; issuing a new code
/// replaces the record wholesale. The attempt is deleted on successful
/// validation or on expiry detection, so a consumed code can never be
/// replayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationAttempt {
    /// Canonical address the code was sent to
    pub address: String,

    /// The 6-digit verification code
    pub code: String,

    /// Channel the code was dispatched over
    pub channel: Channel,

    /// Number of failed validation attempts recorded against this code
    pub attempts: u32,

    /// Timestamp when the code was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp when the code expires; always `issued_at + ttl`, never
    /// extended in place
    pub expires_at: DateTime<Utc>,
}

impl VerificationAttempt {
    /// Creates a new attempt expiring `ttl_seconds` after issuance
    pub fn new(address: String, code: String, channel: Channel, ttl_seconds: i64) -> Self {
        let issued_at = Utc::now();
        let expires_at = issued_at + Duration::seconds(ttl_seconds);

        Self {
            address,
            code,
            channel,
            attempts: 0,
            issued_at,
            expires_at,
        }
    }

    /// Checks if the attempt has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Seconds remaining until expiry, or zero if already expired
    pub fn seconds_until_expiry(&self) -> i64 {
        (self.expires_at - Utc::now()).num_seconds().max(0)
    }

    /// Record one failed validation attempt
    pub fn record_failed_attempt(&mut self) {
        self.attempts += 1;
    }
}
