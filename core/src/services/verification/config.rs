//! Configuration for the verification service

use crate::domain::entities::verification_attempt::CODE_TTL_SECONDS;

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Seconds before an issued code expires
    pub code_ttl_seconds: i64,

    /// Optional cap on failed validation attempts per code
    ///
    /// `None` allows retries until expiry. When set, the attempt is
    /// removed once the cap is reached and later checks see `CodeNotFound`.
    pub max_attempts: Option<u32>,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: CODE_TTL_SECONDS,
            max_attempts: None,
        }
    }
}
