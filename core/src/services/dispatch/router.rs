//! Channel router selecting and invoking the configured message sender

use std::collections::HashMap;
use std::sync::Arc;

use cl_shared::config::environment::Environment;
use cl_shared::types::language::Language;
use cl_shared::utils::address::{is_valid_e164, mask_address, normalize_address};

use crate::domain::entities::verification_attempt::{Channel, CODE_TTL_SECONDS};
use crate::errors::{VerificationError, VerificationResult};
use crate::services::verification::MessageSender;

use super::templates;

/// Router over the injected per-channel message senders
///
/// Holds one sender per registered channel. Dispatch renders the
/// language-selected template and invokes the sender; it never touches
/// the attempt store.
pub struct ChannelRouter {
    senders: HashMap<Channel, Arc<dyn MessageSender>>,
    environment: Environment,
    code_ttl_seconds: i64,
}

impl ChannelRouter {
    /// Create a router with no senders registered
    pub fn new(environment: Environment) -> Self {
        Self {
            senders: HashMap::new(),
            environment,
            code_ttl_seconds: CODE_TTL_SECONDS,
        }
    }

    /// Register the sender backing a delivery channel
    pub fn with_sender(mut self, channel: Channel, sender: Arc<dyn MessageSender>) -> Self {
        self.senders.insert(channel, sender);
        self
    }

    /// Override the TTL quoted in rendered messages
    pub fn with_code_ttl_seconds(mut self, ttl_seconds: i64) -> Self {
        self.code_ttl_seconds = ttl_seconds;
        self
    }

    /// Dispatch a verification code over the requested channel
    ///
    /// Phone-channel addresses are re-normalized before sending;
    /// normalization is idempotent so canonical input is unaffected.
    /// Returns the provider message id on success.
    ///
    /// Failure policy: in production a sender failure propagates as
    /// `DispatchFailed`; in development and staging the failure is logged
    /// and a synthetic message id is returned so flows without provider
    /// credentials stay usable.
    pub async fn dispatch(
        &self,
        channel: Channel,
        address: &str,
        code: &str,
        language: Language,
    ) -> VerificationResult<String> {
        let target = if channel.is_phone() {
            let target = normalize_address(address);
            if !is_valid_e164(&target) {
                // Unknown-country passthrough: send anyway, best effort
                tracing::warn!(
                    channel = %channel,
                    address = %mask_address(&target),
                    "phone address is not in international form after normalization"
                );
            }
            target
        } else {
            address.to_lowercase()
        };

        let ttl_minutes = self.code_ttl_seconds / 60;
        let body = match channel {
            Channel::Email => templates::verification_email_body(language, code, ttl_minutes),
            _ => templates::verification_body(language, code, ttl_minutes),
        };

        let sender = match self.senders.get(&channel) {
            Some(sender) => sender,
            None => {
                tracing::error!(
                    channel = %channel,
                    "no message sender registered for channel"
                );
                return Err(VerificationError::DispatchFailed { channel });
            }
        };

        match sender.send(&target, &body).await {
            Ok(message_id) => {
                tracing::info!(
                    channel = %channel,
                    provider = sender.provider_name(),
                    address = %mask_address(&target),
                    message_id = %message_id,
                    event = "otp_dispatched",
                    "verification message dispatched"
                );
                Ok(message_id)
            }
            Err(error) if !self.environment.is_production() => {
                tracing::warn!(
                    channel = %channel,
                    provider = sender.provider_name(),
                    address = %mask_address(&target),
                    error = %error,
                    event = "otp_dispatch_fallback",
                    "sender failed; continuing in non-production environment"
                );
                Ok(format!("dev-fallback-{}", channel))
            }
            Err(error) => {
                tracing::error!(
                    channel = %channel,
                    provider = sender.provider_name(),
                    address = %mask_address(&target),
                    error = %error,
                    event = "otp_dispatch_failed",
                    "failed to dispatch verification message"
                );
                Err(VerificationError::DispatchFailed { channel })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StubSender {
        should_fail: bool,
        last_target: Mutex<Option<String>>,
        last_body: Mutex<Option<String>>,
    }

    impl StubSender {
        fn new(should_fail: bool) -> Self {
            Self {
                should_fail,
                last_target: Mutex::new(None),
                last_body: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl MessageSender for StubSender {
        async fn send(&self, address: &str, message: &str) -> Result<String, String> {
            if self.should_fail {
                return Err("provider unavailable".to_string());
            }
            *self.last_target.lock().unwrap() = Some(address.to_string());
            *self.last_body.lock().unwrap() = Some(message.to_string());
            Ok("stub-msg-1".to_string())
        }

        fn provider_name(&self) -> &str {
            "stub"
        }
    }

    #[tokio::test]
    async fn test_dispatch_normalizes_phone_target() {
        let sender = Arc::new(StubSender::new(false));
        let router = ChannelRouter::new(Environment::Production)
            .with_sender(Channel::Sms, sender.clone());

        let message_id = router
            .dispatch(Channel::Sms, "01012345678", "123456", Language::Korean)
            .await
            .unwrap();

        assert_eq!(message_id, "stub-msg-1");
        assert_eq!(
            sender.last_target.lock().unwrap().as_deref(),
            Some("+821012345678")
        );
        assert!(sender
            .last_body
            .lock()
            .unwrap()
            .as_deref()
            .unwrap()
            .contains("123456"));
    }

    #[tokio::test]
    async fn test_missing_sender_is_dispatch_failure() {
        let router = ChannelRouter::new(Environment::Production);
        let result = router
            .dispatch(Channel::Email, "user@example.com", "123456", Language::Spanish)
            .await;

        assert!(matches!(
            result,
            Err(VerificationError::DispatchFailed {
                channel: Channel::Email
            })
        ));
    }

    #[tokio::test]
    async fn test_production_propagates_sender_failure() {
        let router = ChannelRouter::new(Environment::Production)
            .with_sender(Channel::Sms, Arc::new(StubSender::new(true)));

        let result = router
            .dispatch(Channel::Sms, "+821012345678", "123456", Language::Korean)
            .await;

        assert!(matches!(
            result,
            Err(VerificationError::DispatchFailed {
                channel: Channel::Sms
            })
        ));
    }

    #[tokio::test]
    async fn test_development_falls_back_on_sender_failure() {
        let router = ChannelRouter::new(Environment::Development)
            .with_sender(Channel::Sms, Arc::new(StubSender::new(true)));

        let message_id = router
            .dispatch(Channel::Sms, "+821012345678", "123456", Language::Korean)
            .await
            .unwrap();

        assert!(message_id.starts_with("dev-fallback-"));
    }

    #[tokio::test]
    async fn test_email_uses_email_template_and_lowercases_target() {
        let sender = Arc::new(StubSender::new(false));
        let router = ChannelRouter::new(Environment::Production)
            .with_sender(Channel::Email, sender.clone());

        router
            .dispatch(Channel::Email, "Ana@Empresa.MX", "654321", Language::Spanish)
            .await
            .unwrap();

        assert_eq!(
            sender.last_target.lock().unwrap().as_deref(),
            Some("ana@empresa.mx")
        );
        let body = sender.last_body.lock().unwrap().clone().unwrap();
        assert!(body.contains("654321"));
        assert!(body.contains("Hola"));
    }
}
