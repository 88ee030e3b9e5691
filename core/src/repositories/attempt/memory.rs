//! In-memory attempt store for single-instance deployments and tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::entities::verification_attempt::VerificationAttempt;

use super::store::AttemptStore;

/// Mutex-guarded map of in-flight attempts
///
/// Suitable for a single process; horizontally-scaled deployments should
/// use the Redis-backed store so every instance observes the same attempt.
/// Expired records are retained until read so the service can distinguish
/// an expired code from a missing one.
#[derive(Default)]
pub struct InMemoryAttemptStore {
    attempts: Mutex<HashMap<String, VerificationAttempt>>,
}

impl InMemoryAttemptStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held, expired or not
    pub fn len(&self) -> usize {
        self.attempts.lock().map(|map| map.len()).unwrap_or(0)
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AttemptStore for InMemoryAttemptStore {
    async fn put(&self, attempt: VerificationAttempt) -> Result<(), String> {
        self.attempts
            .lock()
            .map_err(|_| "attempt map poisoned".to_string())?
            .insert(attempt.address.clone(), attempt);
        Ok(())
    }

    async fn get(&self, address: &str) -> Result<Option<VerificationAttempt>, String> {
        Ok(self
            .attempts
            .lock()
            .map_err(|_| "attempt map poisoned".to_string())?
            .get(address)
            .cloned())
    }

    async fn delete(&self, address: &str) -> Result<(), String> {
        self.attempts
            .lock()
            .map_err(|_| "attempt map poisoned".to_string())?
            .remove(address);
        Ok(())
    }
}
