//! Profile store trait definition

use async_trait::async_trait;

use crate::domain::entities::verification_attempt::Channel;

/// External user-profile store, consumed only after a successful check
///
/// Flagging the address as verified is best-effort: the verification
/// result stands even when the profile update fails, so implementations
/// should report errors but never expect a retry of the check itself.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Flag the address as verified, recording the channel the code was
    /// delivered over
    async fn mark_verified(&self, address: &str, channel: Channel) -> Result<(), String>;
}
