//! Twilio WhatsApp sender
//!
//! Uses the same Twilio messaging API as the SMS sender with
//! `whatsapp:`-prefixed addresses.

use async_trait::async_trait;
use tracing::info;
use twilio::Client;

use cl_core::services::verification::MessageSender;
use cl_shared::utils::address::mask_address;

use super::twilio_sms::{TwilioConfig, TwilioSmsSender};

/// Twilio WhatsApp sender implementation
pub struct TwilioWhatsAppSender {
    client: Client,
    config: TwilioConfig,
    from_number: String,
}

impl TwilioWhatsAppSender {
    /// Create a new WhatsApp sender sharing the Twilio account credentials
    pub fn new(config: TwilioConfig, from_number: String) -> Self {
        let client = Client::new(&config.account_sid, &config.auth_token);

        info!(
            from = %mask_address(&from_number),
            "Twilio WhatsApp sender initialized"
        );

        Self {
            client,
            config,
            from_number,
        }
    }
}

#[async_trait]
impl MessageSender for TwilioWhatsAppSender {
    async fn send(&self, address: &str, message: &str) -> Result<String, String> {
        let normalized =
            TwilioSmsSender::validate_phone_number(address).map_err(|e| e.to_string())?;

        let from = format!("whatsapp:{}", self.from_number);
        let to = format!("whatsapp:{}", normalized);

        TwilioSmsSender::send_with_retry(
            &self.client,
            &from,
            &to,
            message,
            self.config.max_retries,
            self.config.retry_delay_ms,
        )
        .await
        .map_err(|e| e.to_string())
    }

    fn provider_name(&self) -> &str {
        "TwilioWhatsApp"
    }
}
