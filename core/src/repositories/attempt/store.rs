//! Attempt store trait definition

use async_trait::async_trait;

use crate::domain::entities::verification_attempt::VerificationAttempt;

/// Key-value store of in-flight verification attempts, keyed by canonical
/// address
///
/// The store owns attempt records exclusively; callers never observe a
/// partially written attempt. Operations on different addresses are
/// independent and need no ordering guarantee.
#[async_trait]
pub trait AttemptStore: Send + Sync {
    /// Persist an attempt, unconditionally replacing any existing record
    /// for the same address (no merge)
    async fn put(&self, attempt: VerificationAttempt) -> Result<(), String>;

    /// Load the attempt for an address, if one exists
    async fn get(&self, address: &str) -> Result<Option<VerificationAttempt>, String>;

    /// Remove the attempt for an address
    async fn delete(&self, address: &str) -> Result<(), String>;
}
