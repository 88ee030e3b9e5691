//! No-op implementation of ProfileStore for when no profile backend is wired

use async_trait::async_trait;

use crate::domain::entities::verification_attempt::Channel;

use super::store::ProfileStore;

/// No-op profile store
///
/// Used in deployments where the profile flag is maintained elsewhere and
/// in tests that do not care about the side effect.
pub struct NoopProfileStore;

impl NoopProfileStore {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoopProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileStore for NoopProfileStore {
    async fn mark_verified(&self, address: &str, channel: Channel) -> Result<(), String> {
        tracing::debug!(
            address = %cl_shared::utils::address::mask_address(address),
            channel = %channel,
            "no-op profile store: skipping verified flag update"
        );
        Ok(())
    }
}
