//! Delivery channel implementations
//!
//! One `MessageSender` implementation per outbound channel, plus a mock
//! for development and tests. The factory wires a complete
//! `ChannelRouter` from configuration.

pub mod chat_app;
pub mod email;
pub mod mock;

// Twilio senders (feature-gated)
#[cfg(feature = "twilio-sms")]
pub mod twilio_sms;
#[cfg(feature = "twilio-sms")]
pub mod twilio_whatsapp;

use std::sync::Arc;

use cl_core::domain::entities::verification_attempt::Channel;
use cl_core::services::dispatch::ChannelRouter;
use cl_core::services::verification::MessageSender;
use cl_shared::config::environment::Environment;

use crate::config::DeliveryConfig;

// Re-export commonly used types
pub use chat_app::ChatAppSender;
pub use email::{EmailSender, EmailSenderConfig};
pub use mock::MockSender;

#[cfg(feature = "twilio-sms")]
pub use twilio_sms::{TwilioConfig, TwilioSmsSender};
#[cfg(feature = "twilio-sms")]
pub use twilio_whatsapp::TwilioWhatsAppSender;

/// Build a channel router with senders per configuration
///
/// Returns the appropriate sender for each channel based on the provider
/// named in the configuration, falling back to the mock sender when a
/// provider cannot be initialized.
pub fn create_channel_router(environment: Environment, config: &DeliveryConfig) -> ChannelRouter {
    let (sms, whatsapp) = create_phone_senders(config);

    let email: Arc<dyn MessageSender> = match EmailSender::new(EmailSenderConfig::from(config)) {
        Ok(sender) => Arc::new(sender),
        Err(error) => {
            tracing::warn!(
                error = %error,
                "failed to initialize SMTP email sender, using mock"
            );
            Arc::new(MockSender::new())
        }
    };

    ChannelRouter::new(environment)
        .with_sender(Channel::Sms, sms)
        .with_sender(Channel::Whatsapp, whatsapp)
        // Placeholder integration until a real chat-app provider lands
        .with_sender(Channel::ChatApp, Arc::new(ChatAppSender::new()))
        .with_sender(Channel::Email, email)
}

fn create_phone_senders(
    config: &DeliveryConfig,
) -> (Arc<dyn MessageSender>, Arc<dyn MessageSender>) {
    match config.provider.as_str() {
        "mock" => (Arc::new(MockSender::new()), Arc::new(MockSender::new())),
        #[cfg(feature = "twilio-sms")]
        "twilio" => {
            let twilio_config = TwilioConfig {
                account_sid: config.api_key.clone(),
                auth_token: config.api_secret.clone(),
                from_number: config.sms_from.clone(),
                ..Default::default()
            };

            match TwilioSmsSender::new(twilio_config.clone()) {
                Ok(sms) => {
                    let whatsapp =
                        TwilioWhatsAppSender::new(twilio_config, config.whatsapp_from.clone());
                    (Arc::new(sms), Arc::new(whatsapp))
                }
                Err(error) => {
                    tracing::error!(error = %error, "failed to initialize Twilio senders");
                    tracing::warn!("falling back to mock senders for phone channels");
                    (Arc::new(MockSender::new()), Arc::new(MockSender::new()))
                }
            }
        }
        other => {
            tracing::warn!(provider = other, "unknown delivery provider, using mock senders");
            (Arc::new(MockSender::new()), Arc::new(MockSender::new()))
        }
    }
}
