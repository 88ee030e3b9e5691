//! Traits for outbound message delivery integration

use async_trait::async_trait;

/// Capability interface for a delivery provider on one channel
///
/// Implementations must bound their own network timeouts; a hung provider
/// call must eventually surface as an error, never block indefinitely.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Send a rendered verification message to an address
    ///
    /// Returns the provider message id on success.
    async fn send(&self, address: &str, message: &str) -> Result<String, String>;

    /// Human-readable provider name for logs
    fn provider_name(&self) -> &str;
}
