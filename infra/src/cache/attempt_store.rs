//! Redis-backed verification attempt store
//!
//! Stores each attempt as a JSON document under
//! `verification:attempt:{address}` with a TTL matching the attempt's
//! remaining lifetime. Redis reaps expired keys itself, so an expired
//! attempt surfaces as a miss rather than an explicit expiry.

use async_trait::async_trait;
use tracing::debug;

use cl_core::domain::entities::verification_attempt::VerificationAttempt;
use cl_core::repositories::attempt::AttemptStore;
use cl_shared::utils::address::mask_address;

use super::redis_client::RedisClient;

/// Key prefix for attempt records
const ATTEMPT_KEY_PREFIX: &str = "verification:attempt:";

/// Shared attempt store for horizontally-scaled deployments
///
/// Every instance observing the same Redis sees the same attempt, which
/// the in-process default store cannot provide.
#[derive(Clone)]
pub struct RedisAttemptStore {
    client: RedisClient,
}

impl RedisAttemptStore {
    /// Create a new Redis attempt store
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    fn key_for(address: &str) -> String {
        format!("{}{}", ATTEMPT_KEY_PREFIX, address)
    }
}

#[async_trait]
impl AttemptStore for RedisAttemptStore {
    async fn put(&self, attempt: VerificationAttempt) -> Result<(), String> {
        let key = Self::key_for(&attempt.address);
        let ttl = attempt.seconds_until_expiry().max(1) as u64;
        let payload = serde_json::to_string(&attempt)
            .map_err(|e| format!("failed to serialize attempt: {}", e))?;

        debug!(
            address = %mask_address(&attempt.address),
            ttl = ttl,
            "storing verification attempt in Redis"
        );

        self.client
            .set_with_expiry(&key, &payload, ttl)
            .await
            .map_err(|e| e.to_string())
    }

    async fn get(&self, address: &str) -> Result<Option<VerificationAttempt>, String> {
        let key = Self::key_for(address);

        let payload = self.client.get(&key).await.map_err(|e| e.to_string())?;
        match payload {
            Some(payload) => serde_json::from_str(&payload)
                .map(Some)
                .map_err(|e| format!("failed to deserialize attempt: {}", e)),
            None => Ok(None),
        }
    }

    async fn delete(&self, address: &str) -> Result<(), String> {
        let key = Self::key_for(address);
        self.client.delete(&key).await.map_err(|e| e.to_string())
    }
}
