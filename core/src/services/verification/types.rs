//! Types for verification service requests and results

use crate::domain::entities::verification_attempt::Channel;

/// Canonical request to issue a verification code
///
/// Every transport shape is adapted into this single form before it
/// reaches the service.
#[derive(Debug, Clone)]
pub struct StartRequest {
    /// Raw address as supplied by the caller; normalized by the service
    pub address: String,

    /// Requested delivery channel
    pub channel: Channel,

    /// Optional country hint from the caller's form
    pub country_hint: Option<String>,

    /// Optional nationality hint used for message-language selection
    pub nationality_hint: Option<String>,
}

/// Result of issuing a code
///
/// The code itself is never part of the result.
#[derive(Debug, Clone)]
pub struct StartOutcome {
    /// Seconds until the issued code expires
    pub expires_in_seconds: i64,

    /// Provider message id of the dispatched message
    pub message_id: String,
}

/// Result of validating a presented code
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    /// Whether the address is now verified
    pub verified: bool,
}
