//! Chat-app delivery channel (placeholder integration)

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use cl_core::services::verification::MessageSender;
use cl_shared::utils::address::mask_address;

/// Stand-in sender for the chat-app voice-OTP channel
///
/// There is no provider integration yet: every send is reported as
/// delivered without any network call. Swap this implementation out when
/// a real chat-app provider is wired in; nothing else in the dispatch
/// path needs to change.
pub struct ChatAppSender;

impl ChatAppSender {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ChatAppSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageSender for ChatAppSender {
    async fn send(&self, address: &str, message: &str) -> Result<String, String> {
        let message_id = format!("chat-app_{}", Uuid::new_v4());

        info!(
            provider = "chat-app-stub",
            address = %mask_address(address),
            message_id = %message_id,
            message_length = message.len(),
            "chat-app delivery simulated"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "ChatAppStub"
    }
}
